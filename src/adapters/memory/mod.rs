//! In-memory repository adapters for garage records.

mod appointment_repository;
mod client_repository;
mod document_repository;
mod vehicle_repository;

pub use appointment_repository::InMemoryAppointmentRepository;
pub use client_repository::InMemoryClientRepository;
pub use document_repository::InMemoryDocumentRepository;
pub use vehicle_repository::InMemoryVehicleRepository;
