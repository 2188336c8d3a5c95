//! Route table for the auth endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, AuthHandlers};

pub fn router(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/login", post(handlers::sign_in))
        .route("/register", post(handlers::sign_up))
        .route("/logout", post(handlers::sign_out))
        .route("/session", get(handlers::session))
        .with_state(handlers)
}
