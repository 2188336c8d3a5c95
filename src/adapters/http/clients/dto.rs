//! HTTP DTOs for client records.

use serde::{Deserialize, Serialize};

use crate::domain::garage::{Client, VehicleRef};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub vehicles: Vec<VehicleRefDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleRefDto {
    pub id: String,
    pub license_plate: String,
}

impl From<VehicleRef> for VehicleRefDto {
    fn from(vehicle: VehicleRef) -> Self {
        Self {
            id: vehicle.id.to_string(),
            license_plate: vehicle.license_plate,
        }
    }
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.to_string(),
            name: client.name,
            email: client.email,
            phone_number: client.phone_number,
            vehicles: client.vehicles.into_iter().map(VehicleRefDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientListResponse {
    pub clients: Vec<ClientResponse>,
}
