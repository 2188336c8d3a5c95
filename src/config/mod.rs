//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `GARAGE_DESK` prefix and nested values use `__` as the separator.
//!
//! # Example
//!
//! ```no_run
//! use garage_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod error;
mod server;
mod storage;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication configuration (upstream garage API)
    #[serde(default)]
    pub auth: AuthConfig,

    /// Storage configuration (session slot location)
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables with the `GARAGE_DESK`
    /// prefix, e.g. `GARAGE_DESK__SERVER__PORT=3000` -> `server.port = 3000`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GARAGE_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
