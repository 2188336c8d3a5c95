//! HTTP DTOs for appointments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::garage::{
    Appointment, AppointmentStatus, ClientId, ServiceType, VehicleId,
};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointmentRequest {
    pub client_id: ClientId,
    pub vehicle_id: VehicleId,
    pub date_time: DateTime<Utc>,
    pub service_type: ServiceType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub vehicle_id: String,
    pub license_plate: String,
    pub date_time: DateTime<Utc>,
    pub service_type: ServiceType,
    pub status: AppointmentStatus,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.to_string(),
            client_id: appointment.client.id.to_string(),
            client_name: appointment.client.name,
            vehicle_id: appointment.vehicle.id.to_string(),
            license_plate: appointment.vehicle.license_plate,
            date_time: appointment.date_time,
            service_type: appointment.service_type,
            status: appointment.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentListResponse {
    pub appointments: Vec<AppointmentResponse>,
}
