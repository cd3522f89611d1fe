use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_movement, delete_movement, get_movement, list_movements, update_movement,
};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_movement))
        .route("/:slug", put(update_movement))
        .route("/:slug", delete(delete_movement))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new()
        .route("/", get(list_movements))
        .route("/:slug", get(get_movement))
        .merge(protected)
}
