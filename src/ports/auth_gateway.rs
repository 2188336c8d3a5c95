//! Auth gateway port - sign-in and registration against the upstream API.
//!
//! Password verification is entirely the upstream's job. This port only
//! carries credentials over and maps the response into domain types.
//!
//! # Contract
//!
//! Implementations must:
//! - Map rejected credentials to `AuthError::InvalidCredentials`
//! - Map transport failures to `AuthError::ServiceUnavailable`
//! - Never retry on their own; a failed attempt requires explicit
//!   resubmission by the operator

use async_trait::async_trait;

use crate::domain::session::{Role, User};

/// Errors from the upstream auth endpoints.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// The upstream rejected the credentials. Rendered to the operator as a
    /// generic message on purpose.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Registration rejected: {0}")]
    RegistrationRejected(String),

    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Malformed auth response: {0}")]
    MalformedResponse(String),
}

/// Sign-in form contents.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Registration form contents.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// What a successful auth call yields: the user to adopt into the session
/// and, when the upstream issues one, a bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthPayload {
    pub user: User,
    pub token: Option<String>,
}

/// Port for the upstream `/auth/login` and `/auth/register` endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthPayload, AuthError>;

    async fn register(&self, registration: &Registration) -> Result<AuthPayload, AuthError>;
}
