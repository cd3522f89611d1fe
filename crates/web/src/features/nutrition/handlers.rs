use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};
use storage::{
    Database,
    dto::nutrition::{
        CreateNutritionEntryRequest, DailySummaryResponse, DateQuery, NutritionEntryResponse,
        NutritionGoalRequest, NutritionGoalResponse,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;

use super::services;

fn resolve_date(query: &DateQuery) -> NaiveDate {
    query.date.unwrap_or_else(|| Utc::now().date_naive())
}

#[utoipa::path(
    get,
    path = "/api/nutrition",
    params(DateQuery),
    responses(
        (status = 200, description = "Entries for the given day", body = Vec<NutritionEntryResponse>)
    ),
    tag = "nutrition"
)]
pub async fn list_entries(
    State(db): State<Database>,
    Query(query): Query<DateQuery>,
) -> WebResult<Response> {
    let entries = services::list_entries(db.pool(), resolve_date(&query)).await?;

    let response: Vec<NutritionEntryResponse> = entries
        .into_iter()
        .map(NutritionEntryResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/nutrition",
    request_body = CreateNutritionEntryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Entry logged", body = NutritionEntryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 429, description = "Too many requests")
    ),
    tag = "nutrition"
)]
pub async fn create_entry(
    State(db): State<Database>,
    Json(req): Json<CreateNutritionEntryRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let entry = services::create_entry(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(NutritionEntryResponse::from(entry))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/nutrition/{id}",
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
    tag = "nutrition"
)]
pub async fn delete_entry(State(db): State<Database>, Path(id): Path<Uuid>) -> WebResult<Response> {
    services::delete_entry(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/nutrition/summary",
    params(DateQuery),
    responses(
        (status = 200, description = "Day totals against the configured goal", body = DailySummaryResponse)
    ),
    tag = "nutrition"
)]
pub async fn daily_summary(
    State(db): State<Database>,
    Query(query): Query<DateQuery>,
) -> WebResult<Response> {
    let summary = services::daily_summary(db.pool(), resolve_date(&query)).await?;

    Ok(Json(summary).into_response())
}

#[utoipa::path(
    get,
    path = "/api/nutrition/goal",
    responses(
        (status = 200, description = "The configured daily goal", body = NutritionGoalResponse),
        (status = 404, description = "No goal configured")
    ),
    tag = "nutrition"
)]
pub async fn get_goal(State(db): State<Database>) -> WebResult<Response> {
    let goal = services::get_goal(db.pool()).await?;

    Ok(Json(NutritionGoalResponse::from(goal)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/nutrition/goal",
    request_body = NutritionGoalRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Goal set", body = NutritionGoalResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "nutrition"
)]
pub async fn set_goal(
    State(db): State<Database>,
    Json(req): Json<NutritionGoalRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let goal = services::set_goal(db.pool(), &req).await?;

    Ok(Json(NutritionGoalResponse::from(goal)).into_response())
}
