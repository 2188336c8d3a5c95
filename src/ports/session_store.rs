//! Session store port - the durable mirror of the current session.
//!
//! The store is a passive mirror, never the authority: the session manager
//! writes it on sign-in and clears it on sign-out, and reads it exactly once
//! per process lifetime to survive restarts. Absence and a corrupt record
//! are the same thing to callers - a signed-out session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::session::{Session, User};

/// Version tag written into every persisted record. Bump on any change to
/// the stored shape; records with an unknown version hydrate as absent.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors that can occur while writing the session slot.
///
/// Reads never error: `load` and `load_token` report every failure mode as
/// absence.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Wire shape of the persisted session slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl PersistedSession {
    /// Converts a stored record back into a session, treating records with
    /// an unknown version as absent.
    pub fn into_session(self) -> Option<Session> {
        if self.version != SCHEMA_VERSION {
            return None;
        }
        Some(Session { user: self.user })
    }
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            version: SCHEMA_VERSION,
            user: session.user.clone(),
        }
    }
}

/// Port for the single fixed session slot plus the ad-hoc remember-me token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored session, or signed-out when the slot is absent or
    /// fails to parse. Never raises.
    async fn load(&self) -> Session;

    /// Serializes the session into the fixed slot, overwriting any previous
    /// value.
    async fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Removes the slot. No-op when already absent.
    async fn clear(&self) -> Result<(), SessionStoreError>;

    /// Writes the remember-me token next to the session slot.
    async fn save_token(&self, token: &str) -> Result<(), SessionStoreError>;

    /// Returns the stored token, or `None` when absent or unreadable.
    async fn load_token(&self) -> Option<String>;

    /// Removes the token. No-op when already absent.
    async fn clear_token(&self) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::Role;

    #[test]
    fn persisted_session_carries_current_version() {
        let session = Session::for_user(User::with_email("a@b.com", Role::User));
        let record = PersistedSession::from(&session);
        assert_eq!(record.version, SCHEMA_VERSION);
        assert_eq!(record.into_session(), Some(session));
    }

    #[test]
    fn unknown_version_hydrates_as_absent() {
        let record = PersistedSession {
            version: SCHEMA_VERSION + 1,
            user: Some(User::with_email("a@b.com", Role::User)),
        };
        assert_eq!(record.into_session(), None);
    }

    #[test]
    fn signed_out_record_omits_user_field() {
        let record = PersistedSession::from(&Session::signed_out());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"version": SCHEMA_VERSION}));
    }
}
