//! In-memory document repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::garage::{Document, DocumentId};
use crate::ports::{DocumentRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryDocumentRepository {
    records: RwLock<HashMap<DocumentId, Document>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn list(&self) -> Result<Vec<Document>, RepositoryError> {
        let mut documents: Vec<Document> = self.records.read().await.values().cloned().collect();
        documents.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(documents)
    }

    async fn save(&self, document: &Document) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .insert(document.id, document.clone());
        Ok(())
    }

    async fn delete(&self, id: DocumentId) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("Document", id))
    }
}
