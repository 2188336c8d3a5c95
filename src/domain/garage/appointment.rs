//! Appointments - the rows on the dashboard board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AppointmentId, ClientRef, VehicleRef};

/// What kind of work the slot is booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    Maintenance,
    Repair,
}

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
    Completed,
}

/// A booked service slot for a client's vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client: ClientRef,
    pub vehicle: VehicleRef,
    pub date_time: DateTime<Utc>,
    pub service_type: ServiceType,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn new(
        client: ClientRef,
        vehicle: VehicleRef,
        date_time: DateTime<Utc>,
        service_type: ServiceType,
    ) -> Self {
        Self {
            id: AppointmentId::new(),
            client,
            vehicle,
            date_time,
            service_type,
            // New bookings start confirmed; the board only ever moves them
            // to cancelled or completed.
            status: AppointmentStatus::Confirmed,
        }
    }
}
