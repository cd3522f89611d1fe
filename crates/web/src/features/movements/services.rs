use sqlx::PgPool;
use storage::{
    dto::movement::{CreateMovementRequest, UpdateMovementRequest},
    error::{Result, StorageError},
    models::Movement,
    repository::movement::MovementRepository,
    services::similarity,
};

/// List all movements
pub async fn list_movements(pool: &PgPool) -> Result<Vec<Movement>> {
    let repo = MovementRepository::new(pool);
    repo.list().await
}

/// Get movement by slug
pub async fn get_movement_by_slug(pool: &PgPool, slug: &str) -> Result<Movement> {
    let repo = MovementRepository::new(pool);
    repo.find_by_slug(slug).await
}

/// Create a new movement, rejecting near-duplicate names
pub async fn create_movement(pool: &PgPool, request: &CreateMovementRequest) -> Result<Movement> {
    let repo = MovementRepository::new(pool);

    let existing = repo.list().await?;
    reject_similar_name(&request.name, existing.iter())?;

    repo.create(request).await
}

/// Update a movement; a rename is checked against the other movements
pub async fn update_movement(
    pool: &PgPool,
    slug: &str,
    request: &UpdateMovementRequest,
) -> Result<Movement> {
    let repo = MovementRepository::new(pool);
    let existing = repo.find_by_slug(slug).await?;

    if let Some(new_name) = &request.name {
        let others = repo.list().await?;
        reject_similar_name(
            new_name,
            others
                .iter()
                .filter(|m| m.movement_id != existing.movement_id),
        )?;
    }

    repo.update(&existing, request).await
}

/// Delete a movement
pub async fn delete_movement(pool: &PgPool, slug: &str) -> Result<()> {
    let repo = MovementRepository::new(pool);
    let movement = repo.find_by_slug(slug).await?;
    repo.delete(movement.movement_id).await
}

fn reject_similar_name<'a, I>(name: &str, existing: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Movement>,
{
    let names = existing.into_iter().map(|m| m.name.as_str());

    if let Some(similar) = similarity::find_similar(name, names, similarity::DUPLICATE_THRESHOLD) {
        return Err(StorageError::ConstraintViolation(format!(
            "Movement name '{}' is too similar to existing movement '{}'",
            name, similar
        )));
    }

    Ok(())
}
