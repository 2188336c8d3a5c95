//! Vehicles HTTP feature.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateVehicleRequest, OwnerDto, RecordRepairRequest, RepairEntryDto, VehicleListResponse,
    VehicleResponse,
};
pub use handlers::VehicleHandlers;
pub use routes::router;
