//! Upstream model provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upstream model provider configuration
///
/// The model identifier is deliberately absent: it is fixed in code
/// (see [`crate::adapters::ai::DEFAULT_MODEL`]).
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Anthropic API key (required)
    pub anthropic_api_key: Option<String>,

    /// Base URL of the Anthropic API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; unset leaves the transport default in place
    pub timeout_secs: Option<u64>,
}

impl AiConfig {
    /// Get timeout as Duration, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check if Anthropic is configured
    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_anthropic() {
            return Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}
