//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MARQUEE_API_BASE_URL` - Base URL of the remote booking API gateway
//!   (e.g., <http://localhost:8080>)
//!
//! ## Optional
//! - `MARQUEE_HOST` - Bind address (default: 127.0.0.1)
//! - `MARQUEE_PORT` - Listen port (default: 3000)
//! - `MARQUEE_SKIP_SEED` - Set to `1`/`true` to skip demo data seeding on
//!   startup

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the remote booking API
    pub api_base_url: Url,
    /// Skip the startup seeding pass
    pub skip_seed: bool,
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MARQUEE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MARQUEE_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("MARQUEE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MARQUEE_PORT".to_owned(), e.to_string()))?;
        let api_base_url = parse_base_url(&get_required_env("MARQUEE_API_BASE_URL")?)?;
        let skip_seed = get_optional_env("MARQUEE_SKIP_SEED")
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

        Ok(Self {
            host,
            port,
            api_base_url,
            skip_seed,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse and normalize the API base URL.
///
/// A trailing slash is stripped so resource paths can be joined uniformly.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidEnvVar("MARQUEE_API_BASE_URL".to_owned(), e.to_string()))
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
