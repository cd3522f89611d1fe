use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::weight::LogWeightRequest;
use crate::error::{Result, StorageError};
use crate::models::WeightEntry;

pub struct WeightRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WeightRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all entries, newest first
    pub async fn list(&self) -> Result<Vec<WeightEntry>> {
        let entries = sqlx::query_as::<_, WeightEntry>(
            r#"
            SELECT entry_id, recorded_on, bodyweight, created_at
            FROM weight_entries
            ORDER BY recorded_on DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Record a measurement, replacing any earlier value for the same day
    pub async fn upsert(&self, req: &LogWeightRequest) -> Result<WeightEntry> {
        let entry = sqlx::query_as::<_, WeightEntry>(
            r#"
            INSERT INTO weight_entries (recorded_on, bodyweight)
            VALUES ($1, $2)
            ON CONFLICT (recorded_on)
            DO UPDATE SET bodyweight = EXCLUDED.bodyweight
            RETURNING entry_id, recorded_on, bodyweight, created_at
            "#,
        )
        .bind(req.recorded_on)
        .bind(req.bodyweight)
        .fetch_one(self.pool)
        .await?;

        Ok(entry)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM weight_entries WHERE entry_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
