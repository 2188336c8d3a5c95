//! Garage Desk - a locally-hosted admin dashboard for a vehicle-repair garage.
//!
//! Sessions are adopted from an upstream garage API, mirrored to a local
//! file slot, and gate the whole HTTP surface through a route guard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
