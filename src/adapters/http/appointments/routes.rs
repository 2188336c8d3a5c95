//! Route table for the appointment board.

use axum::{
    routing::{delete, get, patch},
    Router,
};

use super::handlers::{self, AppointmentHandlers};

pub fn router(handlers: AppointmentHandlers) -> Router {
    Router::new()
        .route("/", get(handlers::list).post(handlers::create))
        .route("/:id", delete(handlers::delete))
        .route("/:id/status", patch(handlers::update_status))
        .with_state(handlers)
}
