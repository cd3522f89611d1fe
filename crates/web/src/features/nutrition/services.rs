use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::nutrition::{
        CreateNutritionEntryRequest, DailySummaryResponse, NutritionGoalRequest,
        NutritionGoalResponse,
    },
    error::{Result, StorageError},
    models::{NutritionEntry, NutritionGoal},
    repository::nutrition::NutritionRepository,
};
use uuid::Uuid;

/// List entries for one day
pub async fn list_entries(pool: &PgPool, date: NaiveDate) -> Result<Vec<NutritionEntry>> {
    let repo = NutritionRepository::new(pool);
    repo.list_by_date(date).await
}

/// Log a nutrition entry
pub async fn create_entry(
    pool: &PgPool,
    request: &CreateNutritionEntryRequest,
) -> Result<NutritionEntry> {
    let repo = NutritionRepository::new(pool);
    repo.insert(request).await
}

/// Delete an entry
pub async fn delete_entry(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = NutritionRepository::new(pool);
    repo.delete(id).await
}

/// One day's totals against the configured goal
pub async fn daily_summary(pool: &PgPool, date: NaiveDate) -> Result<DailySummaryResponse> {
    let repo = NutritionRepository::new(pool);

    let totals = repo.daily_totals(date).await?;
    let goal = repo.goal().await?.map(NutritionGoalResponse::from);

    Ok(DailySummaryResponse { date, totals, goal })
}

/// The configured goal; absent until one is set
pub async fn get_goal(pool: &PgPool) -> Result<NutritionGoal> {
    let repo = NutritionRepository::new(pool);
    repo.goal().await?.ok_or(StorageError::NotFound)
}

/// Set or replace the goal
pub async fn set_goal(pool: &PgPool, request: &NutritionGoalRequest) -> Result<NutritionGoal> {
    let repo = NutritionRepository::new(pool);
    repo.upsert_goal(request).await
}
