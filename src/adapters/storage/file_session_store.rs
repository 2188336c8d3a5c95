//! File-backed session store adapter.
//!
//! Mirrors the session as a JSON file under a single fixed name inside the
//! data directory, playing the role browser local storage played in the
//! original dashboard. Reads treat every failure - missing file, IO error,
//! malformed JSON, unknown schema version - as an absent session.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::session::Session;
use crate::ports::{PersistedSession, SessionStore, SessionStoreError};

/// Fixed name of the session slot, matching the original storage key.
const SESSION_FILE: &str = "session.json";

/// Fixed name of the remember-me token slot.
const TOKEN_FILE: &str = "token";

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn session_path(&self) -> PathBuf {
        self.base_path.join(SESSION_FILE)
    }

    fn token_path(&self) -> PathBuf {
        self.base_path.join(TOKEN_FILE)
    }

    async fn ensure_dir(&self) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))
    }

    async fn remove_if_present(path: &Path) -> Result<(), SessionStoreError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Session {
        let raw = match fs::read_to_string(self.session_path()).await {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!(error = %e, "session slot unreadable, treating as absent");
                }
                return Session::signed_out();
            }
        };

        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(record) => record.into_session().unwrap_or_else(|| {
                tracing::warn!("stored session has unknown schema version, treating as absent");
                Session::signed_out()
            }),
            Err(e) => {
                tracing::warn!(error = %e, "stored session failed to parse, treating as absent");
                Session::signed_out()
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        self.ensure_dir().await?;

        let json = serde_json::to_string(&PersistedSession::from(session))
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.session_path(), json)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        Self::remove_if_present(&self.session_path()).await
    }

    async fn save_token(&self, token: &str) -> Result<(), SessionStoreError> {
        self.ensure_dir().await?;
        fs::write(self.token_path(), token)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))
    }

    async fn load_token(&self) -> Option<String> {
        match fs::read_to_string(self.token_path()).await {
            Ok(token) if !token.is_empty() => Some(token),
            _ => None,
        }
    }

    async fn clear_token(&self) -> Result<(), SessionStoreError> {
        Self::remove_if_present(&self.token_path()).await
    }
}
