use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movement {
    pub movement_id: Uuid,
    pub name: String,
    pub slug: String,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
}
