use sqlx::PgPool;
use storage::{
    dto::weight::LogWeightRequest, error::Result, models::WeightEntry,
    repository::weight::WeightRepository,
};
use uuid::Uuid;

/// List all body-weight entries, newest first
pub async fn list_entries(pool: &PgPool) -> Result<Vec<WeightEntry>> {
    let repo = WeightRepository::new(pool);
    repo.list().await
}

/// Record a measurement, replacing the value for that day if present
pub async fn log_entry(pool: &PgPool, request: &LogWeightRequest) -> Result<WeightEntry> {
    let repo = WeightRepository::new(pool);
    repo.upsert(request).await
}

/// Delete an entry
pub async fn delete_entry(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = WeightRepository::new(pool);
    repo.delete(id).await
}
