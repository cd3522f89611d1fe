use axum::{Router, routing::get};
use storage::Database;

use super::handlers::list_records;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(list_records))
}
