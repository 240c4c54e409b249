//! Server configuration

use http::HeaderValue;
use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Origins allowed when `ALLOWED_ORIGINS` is unset or blank (local Vite dev server).
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// CORS allowed origins (comma-separated)
    pub allowed_origins: Option<String>,
}

impl ServerConfig {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress(format!("{}:{}", self.host, self.port)))
    }

    /// Get CORS origins as a vector
    ///
    /// Blank entries are dropped; an empty result falls back to
    /// [`DEFAULT_ALLOWED_ORIGINS`].
    pub fn allowed_origins_list(&self) -> Vec<String> {
        let origins: Vec<String> = self
            .allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() {
            DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()
        } else {
            origins
        }
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        for origin in self.allowed_origins_list() {
            if HeaderValue::from_str(&origin).is_err() {
                return Err(ValidationError::InvalidOrigin(origin));
            }
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            allowed_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info,northform_brain=debug,tower_http=info".to_string()
}
