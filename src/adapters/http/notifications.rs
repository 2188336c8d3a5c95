//! Notifications HTTP feature - the single toast slot.
//!
//! The UI polls the current toast and dismisses it by hand when it does not
//! want to wait out the auto-dismiss timer.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::application::{Toast, ToastNotifier, ToastSeverity};

#[derive(Debug, Clone, Serialize)]
pub struct ToastResponse {
    pub message: String,
    pub severity: ToastSeverity,
}

impl From<Toast> for ToastResponse {
    fn from(toast: Toast) -> Self {
        Self {
            message: toast.message,
            severity: toast.severity,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub toast: Option<ToastResponse>,
}

/// GET /notifications
pub async fn current(State(notifier): State<ToastNotifier>) -> Response {
    (
        StatusCode::OK,
        Json(NotificationResponse {
            toast: notifier.current().map(ToastResponse::from),
        }),
    )
        .into_response()
}

/// DELETE /notifications
pub async fn dismiss(State(notifier): State<ToastNotifier>) -> Response {
    notifier.dismiss();
    StatusCode::NO_CONTENT.into_response()
}

pub fn router(notifier: ToastNotifier) -> Router {
    Router::new()
        .route("/", get(current).delete(dismiss))
        .with_state(notifier)
}
