//! Mock auth gateway for tests and offline development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::session::User;
use crate::ports::{AuthError, AuthGateway, AuthPayload, Credentials, Registration};

/// In-memory gateway keyed by email/password pairs.
#[derive(Default)]
pub struct MockAuthGateway {
    accounts: Mutex<HashMap<(String, String), AuthPayload>>,
    unavailable: bool,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account that `login` will accept.
    pub fn with_account(
        self,
        email: impl Into<String>,
        password: impl Into<String>,
        payload: AuthPayload,
    ) -> Self {
        self.accounts
            .lock()
            .unwrap()
            .insert((email.into(), password.into()), payload);
        self
    }

    /// Variant where every call fails as if the upstream were down.
    pub fn unavailable() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            unavailable: true,
        }
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthPayload, AuthError> {
        if self.unavailable {
            return Err(AuthError::ServiceUnavailable("mock offline".to_string()));
        }
        self.accounts
            .lock()
            .unwrap()
            .get(&(credentials.email.clone(), credentials.password.clone()))
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn register(&self, registration: &Registration) -> Result<AuthPayload, AuthError> {
        if self.unavailable {
            return Err(AuthError::ServiceUnavailable("mock offline".to_string()));
        }
        let payload = AuthPayload {
            user: User::with_email(registration.email.clone(), registration.role)
                .with_name(registration.name.clone()),
            token: None,
        };
        self.accounts.lock().unwrap().insert(
            (registration.email.clone(), registration.password.clone()),
            payload.clone(),
        );
        Ok(payload)
    }
}
