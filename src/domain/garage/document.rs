//! Tracked documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DocumentId;

/// A document the garage keeps on file (insurance papers, ITP reports, ...).
/// Only the name and upload date are tracked; file contents live elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(),
            name: name.into(),
            uploaded_at: Utc::now(),
        }
    }
}
