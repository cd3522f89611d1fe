use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Body-weight measurement, one per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WeightEntry {
    pub entry_id: Uuid,
    pub recorded_on: NaiveDate,
    pub bodyweight: Decimal,
    pub created_at: NaiveDateTime,
}
