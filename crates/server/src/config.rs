//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MIOLA_HOST` - Bind address (default: 127.0.0.1)
//! - `MIOLA_PORT` - Listen port (default: 5000)
//! - `MIOLA_BASE_URL` - Public URL image links are built from
//!   (default: `http://localhost:{port}`)
//! - `MIOLA_UPLOAD_DIR` - Directory for uploaded files (default: uploads)
//! - `MIOLA_DATA_FILE` - Persisted catalog document (default: data.json)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Backend application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL used when building image URLs
    pub base_url: String,
    /// Directory uploaded image files are stored in
    pub upload_dir: PathBuf,
    /// Path of the persisted catalog document
    pub data_file: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MIOLA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MIOLA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MIOLA_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MIOLA_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("MIOLA_BASE_URL", &format!("http://localhost:{port}"));
        let upload_dir = PathBuf::from(get_env_or_default("MIOLA_UPLOAD_DIR", "uploads"));
        let data_file = PathBuf::from(get_env_or_default("MIOLA_DATA_FILE", "data.json"));
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            base_url,
            upload_dir,
            data_file,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The public URL a stored file is served from.
    #[must_use]
    pub fn upload_url(&self, filename: &str) -> String {
        format!("{}/uploads/{filename}", self.base_url.trim_end_matches('/'))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
