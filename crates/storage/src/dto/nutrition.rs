use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NutritionEntryResponse {
    pub entry_id: Uuid,
    pub eaten_on: NaiveDate,
    pub name: String,
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
    pub created_at: NaiveDateTime,
}

/// Request payload for logging a nutrition entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNutritionEntryRequest {
    pub eaten_on: NaiveDate,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Entry name must be between 1 and 200 characters"
    ))]
    pub name: String,

    #[validate(range(min = 0))]
    pub calories: i32,

    #[serde(default)]
    #[validate(custom(function = "validate_macro"))]
    pub protein_g: Decimal,

    #[serde(default)]
    #[validate(custom(function = "validate_macro"))]
    pub carbs_g: Decimal,

    #[serde(default)]
    #[validate(custom(function = "validate_macro"))]
    pub fat_g: Decimal,
}

/// Request payload for setting the daily macro goal
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NutritionGoalRequest {
    #[validate(range(min = 0))]
    pub calories: i32,

    #[validate(custom(function = "validate_macro"))]
    pub protein_g: Decimal,

    #[validate(custom(function = "validate_macro"))]
    pub carbs_g: Decimal,

    #[validate(custom(function = "validate_macro"))]
    pub fat_g: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NutritionGoalResponse {
    pub calories: i32,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
    pub updated_at: NaiveDateTime,
}

/// Summed intake for one day
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct DailyTotals {
    pub calories: i64,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
}

/// One day's intake against the configured goal, if any
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailySummaryResponse {
    pub date: NaiveDate,
    pub totals: DailyTotals,
    pub goal: Option<NutritionGoalResponse>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DateQuery {
    /// Defaults to the current UTC date when omitted
    pub date: Option<NaiveDate>,
}

fn validate_macro(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_negative() {
        return Err(validator::ValidationError::new("negative_macro"));
    }
    Ok(())
}

impl From<crate::models::NutritionEntry> for NutritionEntryResponse {
    fn from(entry: crate::models::NutritionEntry) -> Self {
        Self {
            entry_id: entry.entry_id,
            eaten_on: entry.eaten_on,
            name: entry.name,
            calories: entry.calories,
            protein_g: entry.protein_g,
            carbs_g: entry.carbs_g,
            fat_g: entry.fat_g,
            created_at: entry.created_at,
        }
    }
}

impl From<crate::models::NutritionGoal> for NutritionGoalResponse {
    fn from(goal: crate::models::NutritionGoal) -> Self {
        Self {
            calories: goal.calories,
            protein_g: goal.protein_g,
            carbs_g: goal.carbs_g,
            fat_g: goal.fat_g,
            updated_at: goal.updated_at,
        }
    }
}
