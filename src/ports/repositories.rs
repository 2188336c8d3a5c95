//! Repository ports for garage records.
//!
//! The in-memory adapters back these today; a remote-API-backed adapter can
//! replace them without touching the HTTP layer.

use async_trait::async_trait;

use crate::domain::garage::{
    Appointment, AppointmentId, AppointmentStatus, Client, ClientId, Document, DocumentId,
    Vehicle, VehicleId,
};

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// All clients, ordered by name.
    async fn list(&self) -> Result<Vec<Client>, RepositoryError>;

    async fn find(&self, id: ClientId) -> Result<Option<Client>, RepositoryError>;

    /// Inserts or replaces the record with the same id.
    async fn save(&self, client: &Client) -> Result<(), RepositoryError>;

    /// Returns `NotFound` when no such client exists.
    async fn delete(&self, id: ClientId) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// All vehicles, ordered by license plate.
    async fn list(&self) -> Result<Vec<Vehicle>, RepositoryError>;

    async fn find(&self, id: VehicleId) -> Result<Option<Vehicle>, RepositoryError>;

    async fn save(&self, vehicle: &Vehicle) -> Result<(), RepositoryError>;

    async fn delete(&self, id: VehicleId) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// All appointments, ordered by date ascending (the board order).
    async fn list(&self) -> Result<Vec<Appointment>, RepositoryError>;

    async fn find(&self, id: AppointmentId) -> Result<Option<Appointment>, RepositoryError>;

    async fn save(&self, appointment: &Appointment) -> Result<(), RepositoryError>;

    /// Updates only the status, returning the updated record.
    async fn update_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> Result<Appointment, RepositoryError>;

    async fn delete(&self, id: AppointmentId) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// All documents, newest upload first.
    async fn list(&self) -> Result<Vec<Document>, RepositoryError>;

    async fn save(&self, document: &Document) -> Result<(), RepositoryError>;

    async fn delete(&self, id: DocumentId) -> Result<(), RepositoryError>;
}
