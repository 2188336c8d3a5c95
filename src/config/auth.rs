//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (upstream garage API)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the garage auth API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Whether a fresh registration is written to the session slot.
    ///
    /// Off by default: a newly registered account only lives in memory
    /// until its first real sign-in.
    #[serde(default)]
    pub persist_session_on_sign_up: bool,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_base_url.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__API_BASE_URL"));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            persist_session_on_sign_up: false,
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:7000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:7000");
        assert!(!config.persist_session_on_sign_up);
    }

    #[test]
    fn validation_rejects_non_http_url() {
        let config = AuthConfig {
            api_base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_empty_url() {
        let config = AuthConfig {
            api_base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_accepts_https() {
        let config = AuthConfig {
            api_base_url: "https://api.garage.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
