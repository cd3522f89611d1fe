use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::weight::{LogWeightRequest, WeightEntryResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/weight",
    responses(
        (status = 200, description = "All body-weight entries, newest first", body = Vec<WeightEntryResponse>)
    ),
    tag = "weight"
)]
pub async fn list_entries(State(db): State<Database>) -> WebResult<Response> {
    let entries = services::list_entries(db.pool()).await?;

    let response: Vec<WeightEntryResponse> = entries
        .into_iter()
        .map(WeightEntryResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/weight",
    request_body = LogWeightRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Measurement recorded", body = WeightEntryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 429, description = "Too many requests")
    ),
    tag = "weight"
)]
pub async fn log_entry(
    State(db): State<Database>,
    Json(req): Json<LogWeightRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let entry = services::log_entry(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(WeightEntryResponse::from(entry))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/weight/{id}",
    params(
        ("id" = Uuid, Path, description = "Entry ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found")
    ),
    tag = "weight"
)]
pub async fn delete_entry(State(db): State<Database>, Path(id): Path<Uuid>) -> WebResult<Response> {
    services::delete_entry(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
