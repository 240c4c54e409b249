//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NORTHFORM` prefix and nested values use double underscores as separators.
//!
//! The unprefixed `ANTHROPIC_API_KEY` and `ALLOWED_ORIGINS` variables are also
//! honoured, so an existing `.env` file works without renaming anything.
//!
//! # Example
//!
//! ```no_run
//! use northform_brain::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{ServerConfig, DEFAULT_ALLOWED_ORIGINS};

use serde::Deserialize;

/// Unprefixed variable holding the upstream provider key.
const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Unprefixed variable holding the comma-separated CORS allow-list.
const ALLOWED_ORIGINS_VAR: &str = "ALLOWED_ORIGINS";

/// Root application configuration
///
/// Loaded once at startup and passed by value into the pieces that need it;
/// nothing reads the environment after [`AppConfig::load()`] returns.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream model provider configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds defaults from the unprefixed `ANTHROPIC_API_KEY` / `ALLOWED_ORIGINS`
    /// 3. Reads environment variables with `NORTHFORM` prefix, which take precedence
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `NORTHFORM__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `NORTHFORM__AI__ANTHROPIC_API_KEY=...` -> `ai.anthropic_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// A missing API key is not a load error; [`AppConfig::validate()`] reports it.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();

        if let Ok(key) = std::env::var(API_KEY_VAR) {
            builder = builder.set_default("ai.anthropic_api_key", key)?;
        }
        if let Ok(origins) = std::env::var(ALLOWED_ORIGINS_VAR) {
            builder = builder.set_default("server.allowed_origins", origins)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("NORTHFORM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    ///
    /// This is what the binary calls; any error here is fatal to the process.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid, most
    /// importantly when no upstream API key is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }
}
