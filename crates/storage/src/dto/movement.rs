use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovementResponse {
    pub movement_id: Uuid,
    pub name: String,
    pub slug: String,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
}

/// Request payload for creating a new movement
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMovementRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Movement name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
}

/// Request payload for updating an existing movement
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMovementRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
}

impl From<crate::models::Movement> for MovementResponse {
    fn from(movement: crate::models::Movement) -> Self {
        Self {
            movement_id: movement.movement_id,
            name: movement.name,
            slug: movement.slug,
            display_order: movement.display_order,
            created_at: movement.created_at,
        }
    }
}
