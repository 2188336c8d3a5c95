//! In-memory session store adapter, for tests and ephemeral runs.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::session::Session;
use crate::ports::{PersistedSession, SessionStore, SessionStoreError};

#[derive(Default)]
pub struct InMemorySessionStore {
    // Stored as the wire shape so version handling matches the file adapter.
    session: Mutex<Option<PersistedSession>>,
    token: Mutex<Option<String>>,
    fail_writes: bool,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variant whose write operations fail, for exercising mirror-write
    /// error paths.
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    fn check_writable(&self) -> Result<(), SessionStoreError> {
        if self.fail_writes {
            return Err(SessionStoreError::Io("simulated write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Session {
        self.session
            .lock()
            .unwrap()
            .clone()
            .and_then(PersistedSession::into_session)
            .unwrap_or_else(Session::signed_out)
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        self.check_writable()?;
        *self.session.lock().unwrap() = Some(PersistedSession::from(session));
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.check_writable()?;
        *self.session.lock().unwrap() = None;
        Ok(())
    }

    async fn save_token(&self, token: &str) -> Result<(), SessionStoreError> {
        self.check_writable()?;
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn load_token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    async fn clear_token(&self) -> Result<(), SessionStoreError> {
        self.check_writable()?;
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
