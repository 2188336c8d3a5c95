//! Route table for vehicle records.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, VehicleHandlers};

pub fn router(handlers: VehicleHandlers) -> Router {
    Router::new()
        .route("/", get(handlers::list).post(handlers::create))
        .route("/:id", get(handlers::find).delete(handlers::delete))
        .route("/:id/repairs", post(handlers::record_repair))
        .with_state(handlers)
}
