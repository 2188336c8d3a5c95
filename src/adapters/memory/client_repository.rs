//! In-memory client repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::garage::{Client, ClientId};
use crate::ports::{ClientRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryClientRepository {
    records: RwLock<HashMap<ClientId, Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn list(&self) -> Result<Vec<Client>, RepositoryError> {
        let mut clients: Vec<Client> = self.records.read().await.values().cloned().collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clients)
    }

    async fn find(&self, id: ClientId) -> Result<Option<Client>, RepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn save(&self, client: &Client) -> Result<(), RepositoryError> {
        self.records.write().await.insert(client.id, client.clone());
        Ok(())
    }

    async fn delete(&self, id: ClientId) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("Client", id))
    }
}
