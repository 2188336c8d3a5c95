//! HTTP handlers for vehicle records.
//!
//! Vehicles and clients cross-reference each other: the vehicle embeds an
//! owner reference, and the owning client keeps a lightweight vehicle list.
//! Both sides are maintained here so neither repository holds a dangling
//! reference.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{self, ErrorResponse};
use crate::domain::garage::{ClientRef, Vehicle, VehicleId, VehicleRef};
use crate::ports::{ClientRepository, VehicleRepository};

use super::dto::{CreateVehicleRequest, RecordRepairRequest, VehicleListResponse, VehicleResponse};

#[derive(Clone)]
pub struct VehicleHandlers {
    vehicles: Arc<dyn VehicleRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl VehicleHandlers {
    pub fn new(vehicles: Arc<dyn VehicleRepository>, clients: Arc<dyn ClientRepository>) -> Self {
        Self { vehicles, clients }
    }
}

/// GET /vehicles
pub async fn list(State(handlers): State<VehicleHandlers>) -> Response {
    match handlers.vehicles.list().await {
        Ok(vehicles) => (
            StatusCode::OK,
            Json(VehicleListResponse {
                vehicles: vehicles.into_iter().map(VehicleResponse::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => error::repository_error(e),
    }
}

/// GET /vehicles/:id
pub async fn find(
    State(handlers): State<VehicleHandlers>,
    Path(id): Path<VehicleId>,
) -> Response {
    match handlers.vehicles.find(id).await {
        Ok(Some(vehicle)) => {
            (StatusCode::OK, Json(VehicleResponse::from(vehicle))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!("Vehicle not found: {id}"))),
        )
            .into_response(),
        Err(e) => error::repository_error(e),
    }
}

/// POST /vehicles - registers a vehicle to an existing client.
pub async fn create(
    State(handlers): State<VehicleHandlers>,
    Json(req): Json<CreateVehicleRequest>,
) -> Response {
    if req.license_plate.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("License plate is required")),
        )
            .into_response();
    }
    if req.brand.trim().is_empty() || req.model.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Brand and model are required")),
        )
            .into_response();
    }

    let mut client = match handlers.clients.find(req.client_id).await {
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

    let vehicle = Vehicle {
        id: VehicleId::new(),
        license_plate: req.license_plate,
        brand: req.brand,
        model: req.model,
        year: req.year,
        mileage: req.mileage,
        client: ClientRef {
            id: client.id,
            name: client.name.clone(),
        },
        repair_history: Vec::new(),
        details: req.details,
    };

    if let Err(e) = handlers.vehicles.save(&vehicle).await {
        return error::repository_error(e);
    }

    client.register_vehicle(VehicleRef {
        id: vehicle.id,
        license_plate: vehicle.license_plate.clone(),
    });
    if let Err(e) = handlers.clients.save(&client).await {
        return error::repository_error(e);
    }

    tracing::info!(vehicle_id = %vehicle.id, client_id = %client.id, "vehicle registered");
    (StatusCode::CREATED, Json(VehicleResponse::from(vehicle))).into_response()
}

/// POST /vehicles/:id/repairs - appends a dated repair-history entry.
pub async fn record_repair(
    State(handlers): State<VehicleHandlers>,
    Path(id): Path<VehicleId>,
    Json(req): Json<RecordRepairRequest>,
) -> Response {
    if req.description.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Description is required")),
        )
            .into_response();
    }

    let mut vehicle = match handlers.vehicles.find(id).await {
        Ok(Some(vehicle)) => vehicle,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found(format!("Vehicle not found: {id}"))),
            )
                .into_response()
        }
        Err(e) => return error::repository_error(e),
    };

    vehicle.record_repair(req.description);
    if let Err(e) = handlers.vehicles.save(&vehicle).await {
        return error::repository_error(e);
    }

    (StatusCode::OK, Json(VehicleResponse::from(vehicle))).into_response()
}

/// DELETE /vehicles/:id - removes the vehicle and the owner's reference.
pub async fn delete(
    State(handlers): State<VehicleHandlers>,
    Path(id): Path<VehicleId>,
) -> Response {
    let vehicle = match handlers.vehicles.find(id).await {
        Ok(Some(vehicle)) => vehicle,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found(format!("Vehicle not found: {id}"))),
            )
                .into_response()
        }
        Err(e) => return error::repository_error(e),
    };

    if let Err(e) = handlers.vehicles.delete(id).await {
        return error::repository_error(e);
    }

    match handlers.clients.find(vehicle.client.id).await {
        Ok(Some(mut client)) => {
            client.unregister_vehicle(id);
            if let Err(e) = handlers.clients.save(&client).await {
                return error::repository_error(e);
            }
        }
        // The owner may already be gone; the vehicle removal stands.
        Ok(None) => {}
        Err(e) => return error::repository_error(e),
    }

    StatusCode::NO_CONTENT.into_response()
}
