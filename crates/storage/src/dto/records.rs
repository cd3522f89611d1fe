use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::services::records::PersonalRecord;

/// Best set ever logged for a movement
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonalRecordResponse {
    pub movement_id: Uuid,
    pub movement_name: String,
    pub weight: Decimal,
    pub reps: i32,
}

impl From<PersonalRecord> for PersonalRecordResponse {
    fn from(record: PersonalRecord) -> Self {
        Self {
            movement_id: record.movement_id,
            movement_name: record.movement_name,
            weight: record.best.weight,
            reps: record.best.reps,
        }
    }
}
