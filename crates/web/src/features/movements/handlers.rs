use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::movement::{CreateMovementRequest, MovementResponse, UpdateMovementRequest},
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/movements",
    responses(
        (status = 200, description = "List all movements successfully", body = Vec<MovementResponse>)
    ),
    tag = "movements"
)]
pub async fn list_movements(State(db): State<Database>) -> WebResult<Response> {
    let movements = services::list_movements(db.pool()).await?;

    let response: Vec<MovementResponse> =
        movements.into_iter().map(MovementResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/movements/{slug}",
    params(
        ("slug" = String, Path, description = "Movement slug")
    ),
    responses(
        (status = 200, description = "Movement found", body = MovementResponse),
        (status = 404, description = "Movement not found")
    ),
    tag = "movements"
)]
pub async fn get_movement(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> WebResult<Response> {
    let movement = services::get_movement_by_slug(db.pool(), &slug).await?;

    Ok(Json(MovementResponse::from(movement)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/movements",
    request_body = CreateMovementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Movement created successfully", body = MovementResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Name too similar to an existing movement"),
        (status = 429, description = "Too many requests")
    ),
    tag = "movements"
)]
pub async fn create_movement(
    State(db): State<Database>,
    Json(req): Json<CreateMovementRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let movement = services::create_movement(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(MovementResponse::from(movement))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/movements/{slug}",
    params(
        ("slug" = String, Path, description = "Movement slug")
    ),
    request_body = UpdateMovementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Movement updated successfully", body = MovementResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Movement not found"),
        (status = 409, description = "Name too similar to an existing movement")
    ),
    tag = "movements"
)]
pub async fn update_movement(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<UpdateMovementRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let updated = services::update_movement(db.pool(), &slug, &req).await?;

    Ok(Json(MovementResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/movements/{slug}",
    params(
        ("slug" = String, Path, description = "Movement slug")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Movement deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Movement not found"),
        (status = 409, description = "Movement has logged sets")
    ),
    tag = "movements"
)]
pub async fn delete_movement(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> WebResult<Response> {
    services::delete_movement(db.pool(), &slug).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
