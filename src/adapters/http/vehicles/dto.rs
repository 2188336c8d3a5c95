//! HTTP DTOs for vehicle records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::garage::{ClientId, RepairEntry, Vehicle};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicleRequest {
    pub client_id: ClientId,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub mileage: u32,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordRepairRequest {
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleResponse {
    pub id: String,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub mileage: u32,
    pub client: OwnerDto,
    pub repair_history: Vec<RepairEntryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OwnerDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepairEntryDto {
    pub date: DateTime<Utc>,
    pub description: String,
}

impl From<RepairEntry> for RepairEntryDto {
    fn from(entry: RepairEntry) -> Self {
        Self {
            date: entry.date,
            description: entry.description,
        }
    }
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id.to_string(),
            license_plate: vehicle.license_plate,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            mileage: vehicle.mileage,
            client: OwnerDto {
                id: vehicle.client.id.to_string(),
                name: vehicle.client.name,
            },
            repair_history: vehicle
                .repair_history
                .into_iter()
                .map(RepairEntryDto::from)
                .collect(),
            details: vehicle.details,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleListResponse {
    pub vehicles: Vec<VehicleResponse>,
}
