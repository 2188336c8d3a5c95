//! HTTP handlers for the appointment board.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{self, ErrorResponse};
use crate::domain::garage::{Appointment, AppointmentId, ClientRef, VehicleRef};
use crate::ports::{AppointmentRepository, ClientRepository, VehicleRepository};

use super::dto::{
    AppointmentListResponse, AppointmentResponse, CreateAppointmentRequest, UpdateStatusRequest,
};

#[derive(Clone)]
pub struct AppointmentHandlers {
    appointments: Arc<dyn AppointmentRepository>,
    clients: Arc<dyn ClientRepository>,
    vehicles: Arc<dyn VehicleRepository>,
}

impl AppointmentHandlers {
    pub fn new(
        appointments: Arc<dyn AppointmentRepository>,
        clients: Arc<dyn ClientRepository>,
        vehicles: Arc<dyn VehicleRepository>,
    ) -> Self {
        Self {
            appointments,
            clients,
            vehicles,
        }
    }
}

/// GET /appointments
pub async fn list(State(handlers): State<AppointmentHandlers>) -> Response {
    match handlers.appointments.list().await {
        Ok(appointments) => (
            StatusCode::OK,
            Json(AppointmentListResponse {
                appointments: appointments
                    .into_iter()
                    .map(AppointmentResponse::from)
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => error::repository_error(e),
    }
}

/// POST /appointments - books a slot for an existing client's vehicle.
pub async fn create(
    State(handlers): State<AppointmentHandlers>,
    Json(req): Json<CreateAppointmentRequest>,
) -> Response {
    let client = match handlers.clients.find(req.client_id).await {
        Ok(Some(client)) => client,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found(format!(
                    "Client not found: {}",
                    req.client_id
                ))),
            )
                .into_response()
        }
        Err(e) => return error::repository_error(e),
    };

    let vehicle = match handlers.vehicles.find(req.vehicle_id).await {
        Ok(Some(vehicle)) => vehicle,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found(format!(
                    "Vehicle not found: {}",
                    req.vehicle_id
                ))),
            )
                .into_response()
        }
        Err(e) => return error::repository_error(e),
    };

    if vehicle.client.id != client.id {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(
                "Vehicle is not registered to this client",
            )),
        )
            .into_response();
    }

    let appointment = Appointment::new(
        ClientRef {
            id: client.id,
            name: client.name,
        },
        VehicleRef {
            id: vehicle.id,
            license_plate: vehicle.license_plate,
        },
        req.date_time,
        req.service_type,
    );

    if let Err(e) = handlers.appointments.save(&appointment).await {
        return error::repository_error(e);
    }

    tracing::info!(appointment_id = %appointment.id, "appointment booked");
    (
        StatusCode::CREATED,
        Json(AppointmentResponse::from(appointment)),
    )
        .into_response()
}

/// PATCH /appointments/:id/status
pub async fn update_status(
    State(handlers): State<AppointmentHandlers>,
    Path(id): Path<AppointmentId>,
    Json(req): Json<UpdateStatusRequest>,
) -> Response {
    match handlers.appointments.update_status(id, req.status).await {
        Ok(appointment) => (
            StatusCode::OK,
            Json(AppointmentResponse::from(appointment)),
        )
            .into_response(),
        Err(e) => error::repository_error(e),
    }
}

/// DELETE /appointments/:id
pub async fn delete(
    State(handlers): State<AppointmentHandlers>,
    Path(id): Path<AppointmentId>,
) -> Response {
    match handlers.appointments.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error::repository_error(e),
    }
}
