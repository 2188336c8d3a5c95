//! Garage records - plain data shapes for clients, vehicles, appointments,
//! invoices, and documents. These have no lifecycle beyond what the route
//! handlers and repositories do to them.

mod appointment;
mod client;
mod document;
mod errors;
mod ids;
mod invoice;
mod vehicle;

pub use appointment::{Appointment, AppointmentStatus, ServiceType};
pub use client::{Client, VehicleRef};
pub use document::Document;
pub use errors::GarageError;
pub use ids::{AppointmentId, ClientId, DocumentId, VehicleId};
pub use invoice::{Invoice, InvoiceLine};
pub use vehicle::{ClientRef, RepairEntry, Vehicle};
