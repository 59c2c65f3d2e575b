//! Menu app configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `TAVOLA_HOST` - Bind address (default: 127.0.0.1)
//! - `TAVOLA_PORT` - Listen port (default: 3000)
//! - `TAVOLA_RESTAURANT_NAME` - Name shown in the header and hero
//!   (default: Tavola)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_RESTAURANT_NAME: &str = "Tavola";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Menu application configuration.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Restaurant name shown across the site
    pub restaurant_name: String,
}

impl MenuConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("TAVOLA_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TAVOLA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("TAVOLA_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TAVOLA_PORT".to_string(), e.to_string()))?;
        let restaurant_name = get_env_or_default("TAVOLA_RESTAURANT_NAME", DEFAULT_RESTAURANT_NAME);

        Ok(Self {
            host,
            port,
            restaurant_name,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            restaurant_name: DEFAULT_RESTAURANT_NAME.to_string(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
