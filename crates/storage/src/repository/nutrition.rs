use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::nutrition::{CreateNutritionEntryRequest, DailyTotals, NutritionGoalRequest};
use crate::error::{Result, StorageError};
use crate::models::{NutritionEntry, NutritionGoal};

pub struct NutritionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NutritionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all entries for one day, in logging order
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<NutritionEntry>> {
        let entries = sqlx::query_as::<_, NutritionEntry>(
            r#"
            SELECT entry_id, eaten_on, name, calories, protein_g, carbs_g, fat_g, created_at
            FROM nutrition_entries
            WHERE eaten_on = $1
            ORDER BY created_at
            "#,
        )
        .bind(date)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn insert(&self, req: &CreateNutritionEntryRequest) -> Result<NutritionEntry> {
        let entry = sqlx::query_as::<_, NutritionEntry>(
            r#"
            INSERT INTO nutrition_entries (eaten_on, name, calories, protein_g, carbs_g, fat_g)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING entry_id, eaten_on, name, calories, protein_g, carbs_g, fat_g, created_at
            "#,
        )
        .bind(req.eaten_on)
        .bind(&req.name)
        .bind(req.calories)
        .bind(req.protein_g)
        .bind(req.carbs_g)
        .bind(req.fat_g)
        .fetch_one(self.pool)
        .await?;

        Ok(entry)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM nutrition_entries WHERE entry_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Summed intake for one day. Zero rows sum to zero.
    pub async fn daily_totals(&self, date: NaiveDate) -> Result<DailyTotals> {
        let totals = sqlx::query_as::<_, DailyTotals>(
            r#"
            SELECT COALESCE(SUM(calories), 0)::BIGINT AS calories,
                   COALESCE(SUM(protein_g), 0) AS protein_g,
                   COALESCE(SUM(carbs_g), 0) AS carbs_g,
                   COALESCE(SUM(fat_g), 0) AS fat_g
            FROM nutrition_entries
            WHERE eaten_on = $1
            "#,
        )
        .bind(date)
        .fetch_one(self.pool)
        .await?;

        Ok(totals)
    }

    /// The configured goal, if one has been set
    pub async fn goal(&self) -> Result<Option<NutritionGoal>> {
        let goal = sqlx::query_as::<_, NutritionGoal>(
            r#"
            SELECT calories, protein_g, carbs_g, fat_g, updated_at
            FROM nutrition_goal
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(goal)
    }

    /// Set or replace the goal
    pub async fn upsert_goal(&self, req: &NutritionGoalRequest) -> Result<NutritionGoal> {
        let goal = sqlx::query_as::<_, NutritionGoal>(
            r#"
            INSERT INTO nutrition_goal (goal_id, calories, protein_g, carbs_g, fat_g)
            VALUES (TRUE, $1, $2, $3, $4)
            ON CONFLICT (goal_id)
            DO UPDATE SET calories = EXCLUDED.calories,
                          protein_g = EXCLUDED.protein_g,
                          carbs_g = EXCLUDED.carbs_g,
                          fat_g = EXCLUDED.fat_g,
                          updated_at = now()
            RETURNING calories, protein_g, carbs_g, fat_g, updated_at
            "#,
        )
        .bind(req.calories)
        .bind(req.protein_g)
        .bind(req.carbs_g)
        .bind(req.fat_g)
        .fetch_one(self.pool)
        .await?;

        Ok(goal)
    }
}
