use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::dto::session::StartSessionRequest;
use crate::error::{Result, StorageError};
use crate::models::WorkoutSession;

pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List sessions newest first, with the total count for pagination
    pub async fn list(&self, pagination: &PaginationParams) -> Result<(Vec<WorkoutSession>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workout_sessions")
            .fetch_one(self.pool)
            .await?;

        let sessions = sqlx::query_as::<_, WorkoutSession>(
            r#"
            SELECT session_id, started_at, finished_at, notes
            FROM workout_sessions
            ORDER BY started_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit() as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok((sessions, total))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<WorkoutSession> {
        let session = sqlx::query_as::<_, WorkoutSession>(
            r#"
            SELECT session_id, started_at, finished_at, notes
            FROM workout_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(session)
    }

    /// Start a new session
    pub async fn create(&self, req: &StartSessionRequest) -> Result<WorkoutSession> {
        let session = sqlx::query_as::<_, WorkoutSession>(
            r#"
            INSERT INTO workout_sessions (notes)
            VALUES ($1)
            RETURNING session_id, started_at, finished_at, notes
            "#,
        )
        .bind(&req.notes)
        .fetch_one(self.pool)
        .await?;

        Ok(session)
    }

    /// Mark a session finished. Finishing twice is a conflict.
    pub async fn finish(&self, id: Uuid) -> Result<WorkoutSession> {
        let session = sqlx::query_as::<_, WorkoutSession>(
            r#"
            UPDATE workout_sessions
            SET finished_at = now()
            WHERE session_id = $1 AND finished_at IS NULL
            RETURNING session_id, started_at, finished_at, notes
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        match session {
            Some(session) => Ok(session),
            None => {
                // Distinguish "missing" from "already finished"
                self.find_by_id(id).await?;
                Err(StorageError::ConstraintViolation(
                    "Session is already finished".to_string(),
                ))
            }
        }
    }

    /// Delete a session and, via cascade, its sets
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workout_sessions WHERE session_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
