//! Auth gateway adapters.

mod garage_api;
mod mock;

pub use garage_api::GarageApiGateway;
pub use mock::MockAuthGateway;
