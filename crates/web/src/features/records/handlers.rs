use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::records::PersonalRecordResponse};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/records",
    responses(
        (status = 200, description = "Personal record per movement, derived from set history", body = Vec<PersonalRecordResponse>)
    ),
    tag = "records"
)]
pub async fn list_records(State(db): State<Database>) -> WebResult<Response> {
    let records = services::list_records(db.pool()).await?;

    Ok(Json(records).into_response())
}
