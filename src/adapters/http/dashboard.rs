//! Dashboard HTTP feature - the landing board after sign-in.
//!
//! One read-only view: the appointment rows in date order plus record
//! counts, addressed to the signed-in operator.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::adapters::http::appointments::AppointmentResponse;
use crate::adapters::http::error;
use crate::adapters::http::middleware::CurrentUser;
use crate::ports::{AppointmentRepository, ClientRepository, VehicleRepository};

#[derive(Clone)]
pub struct DashboardHandlers {
    appointments: Arc<dyn AppointmentRepository>,
    clients: Arc<dyn ClientRepository>,
    vehicles: Arc<dyn VehicleRepository>,
}

impl DashboardHandlers {
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

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    pub appointments: Vec<AppointmentResponse>,
    pub client_count: usize,
    pub vehicle_count: usize,
}

/// GET /dashboard
pub async fn board(
    State(handlers): State<DashboardHandlers>,
    CurrentUser(user): CurrentUser,
) -> Response {
    let appointments = match handlers.appointments.list().await {
        Ok(appointments) => appointments,
        Err(e) => return error::repository_error(e),
    };
    let client_count = match handlers.clients.list().await {
        Ok(clients) => clients.len(),
        Err(e) => return error::repository_error(e),
    };
    let vehicle_count = match handlers.vehicles.list().await {
        Ok(vehicles) => vehicles.len(),
        Err(e) => return error::repository_error(e),
    };

    (
        StatusCode::OK,
        Json(DashboardResponse {
            operator: user.name.or(user.email),
            appointments: appointments
                .into_iter()
                .map(AppointmentResponse::from)
                .collect(),
            client_count,
            vehicle_count,
        }),
    )
        .into_response()
}

pub fn router(handlers: DashboardHandlers) -> Router {
    Router::new().route("/", get(board)).with_state(handlers)
}
