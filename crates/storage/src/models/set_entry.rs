use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One performance of a movement. Immutable once logged.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SetEntry {
    pub set_id: Uuid,
    pub session_id: Uuid,
    pub movement_id: Uuid,
    pub weight: Decimal,
    pub reps: i32,
    pub logged_at: NaiveDateTime,
}
