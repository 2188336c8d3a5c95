//! Appointments HTTP feature.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AppointmentListResponse, AppointmentResponse, CreateAppointmentRequest, UpdateStatusRequest,
};
pub use handlers::AppointmentHandlers;
pub use routes::router;
