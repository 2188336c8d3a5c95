//! Route guard - binary view-tree selection from session state.
//!
//! Two states, no intermediate: `Anonymous` and `Authenticated`. The guard
//! only observes the session manager; sign-in and sign-out happen elsewhere.
//!
//! ```text
//! Request → route_guard ── signed in ──→ injects CurrentUser → handler
//!                     └── signed out ──→ anonymous path? pass : redirect /
//! ```
//!
//! The unmatched-path policy is deliberately asymmetric: an authenticated
//! request to an unknown path gets a plain not-found response with no
//! redirect, while an anonymous request to any non-anonymous path is sent
//! to the root sign-in view.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use once_cell::sync::Lazy;

use crate::application::SessionManager;
use crate::domain::session::User;

/// Guard middleware state - the session authority.
pub type GuardState = Arc<SessionManager>;

/// Paths reachable without a session: the sign-in view, the auth endpoints,
/// the session probe, the toast slot, and the health check.
static ANONYMOUS_PATHS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "/",
        "/auth/login",
        "/auth/register",
        "/auth/session",
        "/notifications",
        "/healthz",
    ])
});

pub fn is_anonymous_path(path: &str) -> bool {
    ANONYMOUS_PATHS.contains(path)
}

/// Selects the reachable route tree from the current session state.
///
/// Signed in: every route is reachable and `CurrentUser` is injected into
/// request extensions. Signed out: only the anonymous set is reachable,
/// anything else redirects to `/`.
pub async fn route_guard(
    State(manager): State<GuardState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = manager.current_session().await;

    match session.into_user() {
        Some(user) => {
            request.extensions_mut().insert(CurrentUser(user));
            next.run(request).await
        }
        None => {
            if is_anonymous_path(request.uri().path()) {
                next.run(request).await
            } else {
                Redirect::to("/").into_response()
            }
        }
    }
}

/// Fallback for paths no route matches, honoring the asymmetric policy.
pub async fn unmatched_path(State(manager): State<GuardState>, request: Request) -> Response {
    if manager.current_session().await.is_authenticated() {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": format!("No such page: {}", request.uri().path()),
                "code": "NOT_FOUND"
            })),
        )
            .into_response()
    } else {
        // Normally unreachable: the guard already redirected anonymous
        // requests off unknown paths.
        Redirect::to("/").into_response()
    }
}

/// Extractor for the user the guard injected.
///
/// Requires the route to sit behind `route_guard`; anywhere else the
/// extractor rejects with a configuration error, mirroring the fail-fast
/// contract of consuming session state outside its provider.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = GuardRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<CurrentUser>()
                .cloned()
                .ok_or(GuardRejection::OutsideGuardScope)
        })
    }
}

/// Rejection for `CurrentUser` used outside the guard's scope.
#[derive(Debug, Clone)]
pub enum GuardRejection {
    OutsideGuardScope,
}

impl IntoResponse for GuardRejection {
    fn into_response(self) -> Response {
        // A wiring mistake, not an operator-facing condition.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": "Current user requested outside the route guard's scope",
                "code": "GUARD_SCOPE"
            })),
        )
            .into_response()
    }
}
