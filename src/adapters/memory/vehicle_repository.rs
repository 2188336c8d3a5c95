//! In-memory vehicle repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::garage::{Vehicle, VehicleId};
use crate::ports::{RepositoryError, VehicleRepository};

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    records: RwLock<HashMap<VehicleId, Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn list(&self) -> Result<Vec<Vehicle>, RepositoryError> {
        let mut vehicles: Vec<Vehicle> = self.records.read().await.values().cloned().collect();
        vehicles.sort_by(|a, b| a.license_plate.cmp(&b.license_plate));
        Ok(vehicles)
    }

    async fn find(&self, id: VehicleId) -> Result<Option<Vehicle>, RepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn save(&self, vehicle: &Vehicle) -> Result<(), RepositoryError> {
        self.records.write().await.insert(vehicle.id, vehicle.clone());
        Ok(())
    }

    async fn delete(&self, id: VehicleId) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("Vehicle", id))
    }
}
