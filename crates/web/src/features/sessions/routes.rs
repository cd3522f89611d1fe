use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    delete_session, delete_set, finish_session, get_session, list_sessions, log_set, start_session,
};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(start_session))
        .route("/:id", delete(delete_session))
        .route("/:id/finish", put(finish_session))
        .route("/:id/sets", post(log_set))
        .route("/:id/sets/:set_id", delete(delete_set))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new()
        .route("/", get(list_sessions))
        .route("/:id", get(get_session))
        .merge(protected)
}
