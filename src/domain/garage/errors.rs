//! Errors shared by the garage record modules.

use thiserror::Error;

/// Validation errors for garage records. Lookup failures are the
/// repositories' concern, not the records'.
#[derive(Debug, Clone, Error)]
pub enum GarageError {
    #[error("Validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl GarageError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
}
