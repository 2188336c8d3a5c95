//! In-memory appointment repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::garage::{Appointment, AppointmentId, AppointmentStatus};
use crate::ports::{AppointmentRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryAppointmentRepository {
    records: RwLock<HashMap<AppointmentId, Appointment>>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn list(&self) -> Result<Vec<Appointment>, RepositoryError> {
        let mut appointments: Vec<Appointment> =
            self.records.read().await.values().cloned().collect();
        appointments.sort_by_key(|a| a.date_time);
        Ok(appointments)
    }

    async fn find(&self, id: AppointmentId) -> Result<Option<Appointment>, RepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn save(&self, appointment: &Appointment) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .insert(appointment.id, appointment.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> Result<Appointment, RepositoryError> {
        let mut records = self.records.write().await;
        let appointment = records
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found("Appointment", id))?;
        appointment.status = status;
        Ok(appointment.clone())
    }

    async fn delete(&self, id: AppointmentId) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("Appointment", id))
    }
}
