//! Clients HTTP feature.

mod dto;
mod handlers;
mod routes;

pub use dto::{ClientListResponse, ClientResponse, CreateClientRequest, VehicleRefDto};
pub use handlers::ClientHandlers;
pub use routes::router;
