use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{PaginatedResponse, PaginationParams},
        session::{
            LogSetRequest, SessionDetailResponse, SessionResponse, SetLoggedResponse,
            StartSessionRequest,
        },
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/sessions",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated list of workout sessions", body = PaginatedResponse<SessionResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "sessions"
)]
pub async fn list_sessions(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> WebResult<Response> {
    pagination.validate()?;

    let (sessions, total) = services::list_sessions(db.pool(), &pagination).await?;

    let data: Vec<SessionResponse> = sessions
        .into_iter()
        .map(|session| SessionResponse {
            session_id: session.session_id,
            started_at: session.started_at,
            finished_at: session.finished_at,
            notes: session.notes,
        })
        .collect();

    let response = PaginatedResponse::new(data, pagination.page, pagination.page_size, total);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = StartSessionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Session started", body = SessionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 429, description = "Too many requests")
    ),
    tag = "sessions"
)]
pub async fn start_session(
    State(db): State<Database>,
    Json(req): Json<StartSessionRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let session = services::start_session(db.pool(), &req).await?;

    let response = SessionResponse {
        session_id: session.session_id,
        started_at: session.started_at,
        finished_at: session.finished_at,
        notes: session.notes,
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session with all logged sets", body = SessionDetailResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn get_session(State(db): State<Database>, Path(id): Path<Uuid>) -> WebResult<Response> {
    let session = services::get_session_detailed(db.pool(), id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    put,
    path = "/api/sessions/{id}/finish",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Session finished", body = SessionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session already finished")
    ),
    tag = "sessions"
)]
pub async fn finish_session(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let session = services::finish_session(db.pool(), id).await?;

    let response = SessionResponse {
        session_id: session.session_id,
        started_at: session.started_at,
        finished_at: session.finished_at,
        notes: session.notes,
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn delete_session(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::delete_session(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/sets",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    request_body = LogSetRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Set logged, with its personal-record outcome", body = SetLoggedResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Session or movement not found"),
        (status = 409, description = "Session already finished")
    ),
    tag = "sessions"
)]
pub async fn log_set(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<LogSetRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let outcome = services::log_set(db.pool(), id, &req).await?;

    Ok((StatusCode::CREATED, Json(outcome)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{id}/sets/{set_id}",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("set_id" = Uuid, Path, description = "Set ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Set deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Set not found in this session")
    ),
    tag = "sessions"
)]
pub async fn delete_set(
    State(db): State<Database>,
    Path((id, set_id)): Path<(Uuid, Uuid)>,
) -> WebResult<Response> {
    services::delete_set(db.pool(), id, set_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
