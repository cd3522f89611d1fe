use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_entry, daily_summary, delete_entry, get_goal, list_entries, set_goal,
};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_entry))
        .route("/:id", delete(delete_entry))
        .route("/goal", put(set_goal))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new()
        .route("/", get(list_entries))
        .route("/summary", get(daily_summary))
        .route("/goal", get(get_goal))
        .merge(protected)
}
