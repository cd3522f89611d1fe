use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{delete_entry, list_entries, log_entry};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(log_entry))
        .route("/:id", delete(delete_entry))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new().route("/", get(list_entries)).merge(protected)
}
