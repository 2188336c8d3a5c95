//! Ports - trait seams between the application core and the outside world.

mod auth_gateway;
mod repositories;
mod session_store;

pub use auth_gateway::{AuthError, AuthGateway, AuthPayload, Credentials, Registration};
pub use repositories::{
    AppointmentRepository, ClientRepository, DocumentRepository, RepositoryError,
    VehicleRepository,
};
pub use session_store::{PersistedSession, SessionStore, SessionStoreError, SCHEMA_VERSION};
