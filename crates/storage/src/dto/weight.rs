use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeightEntryResponse {
    pub entry_id: Uuid,
    pub recorded_on: NaiveDate,
    pub bodyweight: Decimal,
    pub created_at: NaiveDateTime,
}

/// Request payload for recording a body-weight measurement.
/// Logging twice on the same date replaces the earlier value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LogWeightRequest {
    pub recorded_on: NaiveDate,

    #[validate(custom(function = "validate_bodyweight"))]
    pub bodyweight: Decimal,
}

fn validate_bodyweight(bodyweight: &Decimal) -> Result<(), validator::ValidationError> {
    if *bodyweight <= Decimal::ZERO {
        return Err(validator::ValidationError::new("bodyweight_not_positive"));
    }
    Ok(())
}

impl From<crate::models::WeightEntry> for WeightEntryResponse {
    fn from(entry: crate::models::WeightEntry) -> Self {
        Self {
            entry_id: entry.entry_id,
            recorded_on: entry.recorded_on,
            bodyweight: entry.bodyweight,
            created_at: entry.created_at,
        }
    }
}
