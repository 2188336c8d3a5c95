//! Vehicle records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ClientId, VehicleId};

/// A vehicle serviced by the garage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub mileage: u32,
    pub client: ClientRef,
    pub repair_history: Vec<RepairEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Reference to the owning client from a vehicle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: ClientId,
    pub name: String,
}

/// One line of a vehicle's repair history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairEntry {
    pub date: DateTime<Utc>,
    pub description: String,
}

impl Vehicle {
    pub fn record_repair(&mut self, description: impl Into<String>) {
        self.repair_history.push(RepairEntry {
            date: Utc::now(),
            description: description.into(),
        });
    }
}
