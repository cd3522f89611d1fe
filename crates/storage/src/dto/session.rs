use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::records::PersonalRecordResponse;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub started_at: NaiveDateTime,
    pub finished_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

/// Full session view including every logged set
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionDetailResponse {
    pub session_id: Uuid,
    pub started_at: NaiveDateTime,
    pub finished_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub sets: Vec<SetResponse>,
}

/// Request payload for starting a workout session
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StartSessionRequest {
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// Request payload for logging a set into a session
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LogSetRequest {
    pub movement_id: Uuid,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Decimal,

    #[validate(range(min = 1, message = "Reps must be at least 1"))]
    pub reps: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SetResponse {
    pub set_id: Uuid,
    pub movement_id: Uuid,
    pub movement_name: String,
    pub weight: Decimal,
    pub reps: i32,
    pub logged_at: NaiveDateTime,
}

/// Result of logging a set, including the personal-record outcome.
///
/// `is_pr` compares the set against completed history; `celebrated` is only
/// true when it also beats every earlier set for the movement in this
/// session, so the same record is not announced twice in one workout.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SetLoggedResponse {
    pub set: SetResponse,
    pub is_pr: bool,
    pub celebrated: bool,
    pub previous_best: Option<PersonalRecordResponse>,
}

fn validate_weight(weight: &Decimal) -> Result<(), validator::ValidationError> {
    if weight.is_sign_negative() {
        return Err(validator::ValidationError::new("negative_weight"));
    }
    Ok(())
}
