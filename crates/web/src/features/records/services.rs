use sqlx::PgPool;
use storage::{dto::records::PersonalRecordResponse, error::Result, services::records};

/// Current personal records across all completed history
pub async fn list_records(pool: &PgPool) -> Result<Vec<PersonalRecordResponse>> {
    let records = records::current_records(pool).await?;

    Ok(records
        .into_iter()
        .map(PersonalRecordResponse::from)
        .collect())
}
