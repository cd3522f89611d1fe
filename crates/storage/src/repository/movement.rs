use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::movement::{CreateMovementRequest, UpdateMovementRequest};
use crate::error::{Result, StorageError};
use crate::models::Movement;

pub struct MovementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MovementRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all movements in display order
    pub async fn list(&self) -> Result<Vec<Movement>> {
        let movements = sqlx::query_as::<_, Movement>(
            r#"
            SELECT movement_id, name, slug, display_order, created_at
            FROM movements
            ORDER BY display_order, name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(movements)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Movement> {
        let movement = sqlx::query_as::<_, Movement>(
            r#"
            SELECT movement_id, name, slug, display_order, created_at
            FROM movements
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(movement)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Movement> {
        let movement = sqlx::query_as::<_, Movement>(
            r#"
            SELECT movement_id, name, slug, display_order, created_at
            FROM movements
            WHERE movement_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(movement)
    }

    /// Generate a unique slug from the movement name
    pub async fn generate_unique_slug(&self, name: &str) -> Result<String> {
        let base_slug = name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { '-' } else { c })
            .filter(|c| c.is_alphanumeric() || *c == '-')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<&str>>()
            .join("-");

        let base_slug = if base_slug.is_empty() {
            "movement".to_string()
        } else {
            base_slug
        };

        let mut final_slug = base_slug.clone();
        let mut counter = 2;

        while sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movements WHERE slug = $1)")
            .bind(&final_slug)
            .fetch_one(self.pool)
            .await?
        {
            final_slug = format!("{}-{}", base_slug, counter);
            counter += 1;
        }

        Ok(final_slug)
    }

    /// Create a new movement
    pub async fn create(&self, req: &CreateMovementRequest) -> Result<Movement> {
        let slug = self.generate_unique_slug(&req.name).await?;

        let movement = sqlx::query_as::<_, Movement>(
            r#"
            INSERT INTO movements (name, slug, display_order)
            VALUES ($1, $2, $3)
            RETURNING movement_id, name, slug, display_order, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&slug)
        .bind(req.display_order.unwrap_or(0))
        .fetch_one(self.pool)
        .await?;

        Ok(movement)
    }

    /// Update an existing movement. A rename regenerates the slug.
    pub async fn update(
        &self,
        existing: &Movement,
        req: &UpdateMovementRequest,
    ) -> Result<Movement> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let display_order = req.display_order.unwrap_or(existing.display_order);

        let slug = if req.name.is_some() && name != &existing.name {
            self.generate_unique_slug(name).await?
        } else {
            existing.slug.clone()
        };

        let movement = sqlx::query_as::<_, Movement>(
            r#"
            UPDATE movements
            SET name = $2,
                slug = $3,
                display_order = $4
            WHERE movement_id = $1
            RETURNING movement_id, name, slug, display_order, created_at
            "#,
        )
        .bind(existing.movement_id)
        .bind(name)
        .bind(&slug)
        .bind(display_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(movement)
    }

    /// Delete a movement. Fails if sets reference it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = match sqlx::query("DELETE FROM movements WHERE movement_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                let error = StorageError::from(e);
                if error.is_foreign_key_violation() {
                    return Err(StorageError::ConstraintViolation(
                        "Movement has logged sets and cannot be deleted".to_string(),
                    ));
                }
                return Err(error);
            }
        };

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
