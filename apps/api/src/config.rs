//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! development defaults.

use std::env;

/// The fixed credential pair accepted by the auth gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Credentials required by destructive operations
    pub credentials: Credentials,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            host: env::var("CANTINA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("CANTINA_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CANTINA_PORT".to_string()))?,

            credentials: Credentials {
                username: env::var("CANTINA_ADMIN_USER").unwrap_or_else(|_| "admin".to_string()),

                // Development placeholder. A real deployment MUST set this
                // via environment variable.
                password: env::var("CANTINA_ADMIN_PASSWORD")
                    .unwrap_or_else(|_| "4321".to_string()),
            },
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
