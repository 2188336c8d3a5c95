//! Domain layer - session and garage record types.

pub mod garage;
pub mod session;
