use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::session::SetResponse;
use crate::error::{Result, StorageError};
use crate::models::SetEntry;
use crate::services::records::RecordedSet;

pub struct SetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SetRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        session_id: Uuid,
        movement_id: Uuid,
        weight: Decimal,
        reps: i32,
    ) -> Result<SetEntry> {
        let set = sqlx::query_as::<_, SetEntry>(
            r#"
            INSERT INTO set_entries (session_id, movement_id, weight, reps)
            VALUES ($1, $2, $3, $4)
            RETURNING set_id, session_id, movement_id, weight, reps, logged_at
            "#,
        )
        .bind(session_id)
        .bind(movement_id)
        .bind(weight)
        .bind(reps)
        .fetch_one(self.pool)
        .await?;

        Ok(set)
    }

    /// Sets of one session with movement names, in logging order
    pub async fn session_sets(&self, session_id: Uuid) -> Result<Vec<SetResponse>> {
        let sets = sqlx::query_as::<_, SetResponse>(
            r#"
            SELECT s.set_id, s.movement_id, m.name AS movement_name,
                   s.weight, s.reps, s.logged_at
            FROM set_entries s
            JOIN movements m ON m.movement_id = s.movement_id
            WHERE s.session_id = $1
            ORDER BY s.logged_at
            "#,
        )
        .bind(session_id)
        .fetch_all(self.pool)
        .await?;

        Ok(sets)
    }

    /// Every set ever logged, for record derivation
    pub async fn full_history(&self) -> Result<Vec<RecordedSet>> {
        let history = sqlx::query_as::<_, RecordedSet>(
            r#"
            SELECT s.movement_id, m.name AS movement_name, s.weight, s.reps
            FROM set_entries s
            JOIN movements m ON m.movement_id = s.movement_id
            ORDER BY s.logged_at
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(history)
    }

    /// History from every session except the one given (the completed
    /// history a new set in that session is judged against)
    pub async fn history_excluding_session(&self, session_id: Uuid) -> Result<Vec<RecordedSet>> {
        let history = sqlx::query_as::<_, RecordedSet>(
            r#"
            SELECT s.movement_id, m.name AS movement_name, s.weight, s.reps
            FROM set_entries s
            JOIN movements m ON m.movement_id = s.movement_id
            WHERE s.session_id <> $1
            ORDER BY s.logged_at
            "#,
        )
        .bind(session_id)
        .fetch_all(self.pool)
        .await?;

        Ok(history)
    }

    /// Sets already logged in the given session, in logging order
    pub async fn session_history(&self, session_id: Uuid) -> Result<Vec<RecordedSet>> {
        let history = sqlx::query_as::<_, RecordedSet>(
            r#"
            SELECT s.movement_id, m.name AS movement_name, s.weight, s.reps
            FROM set_entries s
            JOIN movements m ON m.movement_id = s.movement_id
            WHERE s.session_id = $1
            ORDER BY s.logged_at
            "#,
        )
        .bind(session_id)
        .fetch_all(self.pool)
        .await?;

        Ok(history)
    }

    /// Delete a set from a session
    pub async fn delete(&self, session_id: Uuid, set_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM set_entries WHERE set_id = $1 AND session_id = $2")
            .bind(set_id)
            .bind(session_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
