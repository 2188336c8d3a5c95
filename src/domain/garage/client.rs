//! Client records - the people whose vehicles the garage services.

use serde::{Deserialize, Serialize};

use super::{ClientId, VehicleId};

/// A garage client with the vehicles registered to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    /// Lightweight references to the client's vehicles. The full vehicle
    /// records live in the vehicle repository.
    pub vehicles: Vec<VehicleRef>,
}

/// Reference to a vehicle from a client record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRef {
    pub id: VehicleId,
    pub license_plate: String,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: ClientId::new(),
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            vehicles: Vec::new(),
        }
    }

    /// Register a vehicle reference, replacing a stale entry with the same id.
    pub fn register_vehicle(&mut self, vehicle: VehicleRef) {
        self.vehicles.retain(|v| v.id != vehicle.id);
        self.vehicles.push(vehicle);
    }

    pub fn unregister_vehicle(&mut self, vehicle_id: VehicleId) {
        self.vehicles.retain(|v| v.id != vehicle_id);
    }
}
