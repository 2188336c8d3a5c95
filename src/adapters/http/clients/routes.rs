//! Route table for client records.

use axum::{routing::get, Router};

use super::handlers::{self, ClientHandlers};

pub fn router(handlers: ClientHandlers) -> Router {
    Router::new()
        .route("/", get(handlers::list).post(handlers::create))
        .route("/:id", get(handlers::find).delete(handlers::delete))
        .with_state(handlers)
}
