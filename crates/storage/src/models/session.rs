use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single workout. `finished_at` is null while the workout is in progress.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutSession {
    pub session_id: Uuid,
    pub started_at: NaiveDateTime,
    pub finished_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl WorkoutSession {
    pub fn is_active(&self) -> bool {
        self.finished_at.is_none()
    }
}
