//! HTTP handlers for the auth endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::{SessionManager, ToastNotifier, ToastSeverity};
use crate::ports::{AuthError, AuthGateway, Credentials, Registration};

use super::dto::{SessionResponse, SignInRequest, SignUpRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthHandlers {
    manager: Arc<SessionManager>,
    gateway: Arc<dyn AuthGateway>,
    notifier: ToastNotifier,
}

impl AuthHandlers {
    pub fn new(
        manager: Arc<SessionManager>,
        gateway: Arc<dyn AuthGateway>,
        notifier: ToastNotifier,
    ) -> Self {
        Self {
            manager,
            gateway,
            notifier,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /auth/login - Sign in against the upstream API.
pub async fn sign_in(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<SignInRequest>,
) -> Response {
    if let Err(response) = validate_credentials(&req.email, &req.password) {
        return response;
    }

    let credentials = Credentials {
        email: req.email,
        password: req.password,
        remember_me: req.remember_me,
    };

    let payload = match handlers.gateway.login(&credentials).await {
        Ok(payload) => payload,
        Err(e) => return handlers.auth_failure(e),
    };

    // In-memory state is the authority; a failed mirror write is logged
    // and the sign-in still stands.
    if let Err(e) = handlers.manager.sign_in(payload.user).await {
        tracing::warn!(error = %e, "session mirror write failed during sign-in");
    }
    if let Some(token) = payload.token {
        if let Err(e) = handlers
            .manager
            .remember_token(token, credentials.remember_me)
            .await
        {
            tracing::warn!(error = %e, "token write failed during sign-in");
        }
    }

    handlers.notifier.show("Signed in", ToastSeverity::Success);
    let session = handlers.manager.current_session().await;
    (StatusCode::OK, Json(SessionResponse::from(session))).into_response()
}

/// POST /auth/register - Register against the upstream API.
///
/// The resulting session is adopted in memory; whether it is also persisted
/// is the session manager's configuration choice.
pub async fn sign_up(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<SignUpRequest>,
) -> Response {
    if req.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Name is required")),
        )
            .into_response();
    }
    if let Err(response) = validate_credentials(&req.email, &req.password) {
        return response;
    }

    let registration = Registration {
        name: req.name,
        email: req.email,
        password: req.password,
        role: req.role.unwrap_or_default(),
    };

    let payload = match handlers.gateway.register(&registration).await {
        Ok(payload) => payload,
        Err(e) => return handlers.auth_failure(e),
    };

    if let Err(e) = handlers.manager.sign_up(payload.user).await {
        tracing::warn!(error = %e, "session mirror write failed during sign-up");
    }

    handlers.notifier.show("Account created", ToastSeverity::Success);
    let session = handlers.manager.current_session().await;
    (StatusCode::CREATED, Json(SessionResponse::from(session))).into_response()
}

/// POST /auth/logout - Sign out and return to the root path.
///
/// The redirect is unconditional: it happens whatever path the operator was
/// on and even if clearing the persisted slots failed.
pub async fn sign_out(State(handlers): State<AuthHandlers>) -> Response {
    if let Err(e) = handlers.manager.sign_out().await {
        tracing::error!(error = %e, "failed to clear persisted session on sign-out");
    }
    handlers.notifier.show("Signed out", ToastSeverity::Info);
    Redirect::to("/").into_response()
}

/// GET /auth/session - The current session, signed in or not.
pub async fn session(State(handlers): State<AuthHandlers>) -> Response {
    let session = handlers.manager.current_session().await;
    (StatusCode::OK, Json(SessionResponse::from(session))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn validate_credentials(email: &str, password: &str) -> Result<(), Response> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid email address")),
        )
            .into_response());
    }
    if password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Password is required")),
        )
            .into_response());
    }
    Ok(())
}

impl AuthHandlers {
    /// The session is left unchanged on every auth failure; the operator's
    /// only recourse is resubmission.
    fn auth_failure(&self, error: AuthError) -> Response {
        match error {
            AuthError::InvalidCredentials => {
                self.notifier
                    .show("Invalid email or password", ToastSeverity::Error);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::unauthorized("Invalid email or password")),
                )
                    .into_response()
            }
            AuthError::RegistrationRejected(message) => {
                self.notifier
                    .show("Registration failed", ToastSeverity::Error);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(message)),
                )
                    .into_response()
            }
            AuthError::ServiceUnavailable(message) => {
                tracing::error!(error = %message, "auth service unavailable");
                self.notifier
                    .show("Service unavailable, try again", ToastSeverity::Error);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorResponse::unavailable("Authentication service unavailable")),
                )
                    .into_response()
            }
            AuthError::MalformedResponse(message) => {
                tracing::error!(error = %message, "malformed auth response");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorResponse::internal("Malformed upstream response")),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockAuthGateway;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::session::{Role, User};
    use crate::ports::AuthPayload;

    async fn handlers_with(gateway: MockAuthGateway) -> AuthHandlers {
        let store = Arc::new(InMemorySessionStore::new());
        let manager = Arc::new(SessionManager::hydrate(store, false).await);
        AuthHandlers::new(manager, Arc::new(gateway), ToastNotifier::new())
    }

    #[tokio::test]
    async fn sign_in_with_bad_email_is_rejected_before_the_gateway() {
        let handlers = handlers_with(MockAuthGateway::new()).await;
        let response = sign_in(
            State(handlers),
            Json(SignInRequest {
                email: "not-an-email".to_string(),
                password: "secret".to_string(),
                remember_me: false,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sign_in_failure_leaves_session_unchanged_and_toasts() {
        let handlers = handlers_with(MockAuthGateway::new()).await;
        let manager = handlers.manager.clone();
        let notifier = handlers.notifier.clone();

        let response = sign_in(
            State(handlers),
            Json(SignInRequest {
                email: "a@b.com".to_string(),
                password: "wrong".to_string(),
                remember_me: false,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!manager.current_session().await.is_authenticated());
        assert_eq!(
            notifier.current().unwrap().message,
            "Invalid email or password"
        );
    }

    #[tokio::test]
    async fn successful_sign_in_adopts_the_session() {
        let gateway = MockAuthGateway::new().with_account(
            "a@b.com",
            "secret",
            AuthPayload {
                user: User::with_email("a@b.com", Role::User),
                token: Some("tok".to_string()),
            },
        );
        let handlers = handlers_with(gateway).await;
        let manager = handlers.manager.clone();

        let response = sign_in(
            State(handlers),
            Json(SignInRequest {
                email: "a@b.com".to_string(),
                password: "secret".to_string(),
                remember_me: true,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let session = manager.current_session().await;
        assert_eq!(session.user().unwrap().email.as_deref(), Some("a@b.com"));
        assert_eq!(manager.token().await.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn sign_up_requires_a_name() {
        let handlers = handlers_with(MockAuthGateway::new()).await;
        let response = sign_up(
            State(handlers),
            Json(SignUpRequest {
                name: " ".to_string(),
                email: "a@b.com".to_string(),
                password: "secret".to_string(),
                role: None,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sign_out_always_redirects_to_root() {
        let handlers = handlers_with(MockAuthGateway::new()).await;
        let manager = handlers.manager.clone();
        manager
            .sign_in(User::with_email("a@b.com", Role::User))
            .await
            .unwrap();

        let response = sign_out(State(handlers)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/");
        assert!(!manager.current_session().await.is_authenticated());
    }

    #[tokio::test]
    async fn unavailable_gateway_maps_to_503() {
        let handlers = handlers_with(MockAuthGateway::unavailable()).await;
        let response = sign_in(
            State(handlers),
            Json(SignInRequest {
                email: "a@b.com".to_string(),
                password: "secret".to_string(),
                remember_me: false,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
