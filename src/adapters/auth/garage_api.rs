//! Upstream garage API adapter for the `AuthGateway` port.
//!
//! Speaks plain JSON to the upstream service:
//!
//! - `POST {base}/auth/login` with `{email, password}`
//! - `POST {base}/auth/register` with `{name, email, password, role}`
//!
//! Any 4xx on login collapses to `InvalidCredentials` - the operator only
//! ever sees the generic message. Transport failures and 5xx map to
//! `ServiceUnavailable`. Nothing is retried.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::session::{Role, User};
use crate::ports::{AuthError, AuthGateway, AuthPayload, Credentials, Registration};

#[derive(Debug, Clone)]
pub struct GarageApiGateway {
    client: reqwest::Client,
    base_url: String,
}

impl GarageApiGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: &'a str,
}

/// Response shape the upstream returns from both auth endpoints. The user
/// object is optional; some deployments return only a role and token.
#[derive(Debug, Deserialize)]
struct AuthResponseBody {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<WireUser>,
    #[serde(default)]
    role: Option<Role>,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    #[serde(default, alias = "_id")]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    role: Option<Role>,
}

impl AuthResponseBody {
    /// Builds the session user. When the upstream omits the user object the
    /// session still gets a minimal user from the submitted email, the way
    /// the original sign-in form did.
    fn into_payload(self, fallback_email: &str) -> AuthPayload {
        let user = match self.user {
            Some(wire) => User {
                id: wire.id,
                name: wire.name,
                email: wire.email.or_else(|| Some(fallback_email.to_string())),
                image: wire.image,
                role: wire.role.or(self.role).or(Some(Role::User)),
            },
            None => User::with_email(fallback_email, self.role.unwrap_or_default()),
        };
        AuthPayload {
            user,
            token: self.token,
        }
    }
}

#[async_trait]
impl AuthGateway for GarageApiGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthPayload, AuthError> {
        let response = self
            .client
            .post(self.endpoint("/auth/login"))
            .json(&LoginBody {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(|e| AuthError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            tracing::error!(%status, "upstream rejected login");
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::ServiceUnavailable(format!(
                "upstream returned {status}"
            )));
        }

        let body: AuthResponseBody = response
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        Ok(body.into_payload(&credentials.email))
    }

    async fn register(&self, registration: &Registration) -> Result<AuthPayload, AuthError> {
        let response = self
            .client
            .post(self.endpoint("/auth/register"))
            .json(&RegisterBody {
                name: &registration.name,
                email: &registration.email,
                password: &registration.password,
                role: registration.role.as_str(),
            })
            .send()
            .await
            .map_err(|e| AuthError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(%status, "upstream rejected registration");
            return Err(AuthError::RegistrationRejected(if detail.is_empty() {
                status.to_string()
            } else {
                detail
            }));
        }
        if !status.is_success() {
            return Err(AuthError::ServiceUnavailable(format!(
                "upstream returned {status}"
            )));
        }

        let body: AuthResponseBody = response
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        Ok(body.into_payload(&registration.email))
    }
}
