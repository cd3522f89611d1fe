use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NutritionEntry {
    pub entry_id: Uuid,
    pub eaten_on: NaiveDate,
    pub name: String,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
    pub created_at: NaiveDateTime,
}

/// Daily macro targets. Stored as a single row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NutritionGoal {
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
    pub updated_at: NaiveDateTime,
}
