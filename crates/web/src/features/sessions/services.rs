use sqlx::PgPool;
use storage::{
    dto::{
        common::PaginationParams,
        records::PersonalRecordResponse,
        session::{
            LogSetRequest, SessionDetailResponse, SetLoggedResponse, SetResponse,
            StartSessionRequest,
        },
    },
    error::{Result, StorageError},
    models::WorkoutSession,
    repository::{
        movement::MovementRepository, session::SessionRepository, set_entry::SetRepository,
    },
    services::records::{self, SetScore},
};
use uuid::Uuid;

/// List sessions, newest first
pub async fn list_sessions(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<(Vec<WorkoutSession>, i64)> {
    let repo = SessionRepository::new(pool);
    repo.list(pagination).await
}

/// Start a new workout session
pub async fn start_session(pool: &PgPool, request: &StartSessionRequest) -> Result<WorkoutSession> {
    let repo = SessionRepository::new(pool);
    repo.create(request).await
}

/// Get a session with all of its sets
pub async fn get_session_detailed(pool: &PgPool, id: Uuid) -> Result<SessionDetailResponse> {
    let session = SessionRepository::new(pool).find_by_id(id).await?;
    let sets = SetRepository::new(pool).session_sets(id).await?;

    Ok(SessionDetailResponse {
        session_id: session.session_id,
        started_at: session.started_at,
        finished_at: session.finished_at,
        notes: session.notes,
        sets,
    })
}

/// Mark a session finished
pub async fn finish_session(pool: &PgPool, id: Uuid) -> Result<WorkoutSession> {
    let repo = SessionRepository::new(pool);
    repo.finish(id).await
}

/// Delete a session and its sets
pub async fn delete_session(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = SessionRepository::new(pool);
    repo.delete(id).await
}

/// Log a set into an active session and report its record outcome
pub async fn log_set(
    pool: &PgPool,
    session_id: Uuid,
    request: &LogSetRequest,
) -> Result<SetLoggedResponse> {
    let session = SessionRepository::new(pool).find_by_id(session_id).await?;
    if !session.is_active() {
        return Err(StorageError::ConstraintViolation(
            "Cannot log sets into a finished session".to_string(),
        ));
    }

    let movement = MovementRepository::new(pool)
        .find_by_id(request.movement_id)
        .await?;

    let candidate = SetScore {
        weight: request.weight,
        reps: request.reps,
    };
    let outcome =
        records::evaluate_logged_set(pool, session_id, request.movement_id, &candidate).await?;

    let set = SetRepository::new(pool)
        .insert(session_id, request.movement_id, request.weight, request.reps)
        .await?;

    Ok(SetLoggedResponse {
        set: SetResponse {
            set_id: set.set_id,
            movement_id: set.movement_id,
            movement_name: movement.name,
            weight: set.weight,
            reps: set.reps,
            logged_at: set.logged_at,
        },
        is_pr: outcome.is_pr,
        celebrated: outcome.celebrated,
        previous_best: outcome.previous_best.map(PersonalRecordResponse::from),
    })
}

/// Delete a set from a session
pub async fn delete_set(pool: &PgPool, session_id: Uuid, set_id: Uuid) -> Result<()> {
    let repo = SetRepository::new(pool);
    repo.delete(session_id, set_id).await
}
