//! Session errors.

use thiserror::Error;

/// Errors raised by session manager operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The in-memory session was updated but mirroring it to the persisted
    /// store failed. The in-memory state remains authoritative.
    #[error("Session persistence failed: {0}")]
    Persistence(String),
}
