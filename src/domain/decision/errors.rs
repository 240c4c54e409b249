//! Error types for decision validation and reply parsing.

use thiserror::Error;

/// Rejections raised before any upstream call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionValidationError {
    #[error("Provide at least two options.")]
    InsufficientOptions {
        /// Number of options actually supplied.
        provided: usize,
    },
}

/// Failures turning the model's raw text into a structured reply.
#[derive(Debug, Error)]
pub enum ReplyParseError {
    /// The text is not syntactically valid JSON.
    #[error("Upstream response was not valid JSON.")]
    NotJson(#[source] serde_json::Error),

    /// Valid JSON, but a required field is missing or has the wrong shape.
    #[error("{0}")]
    SchemaMismatch(#[source] serde_json::Error),
}

impl ReplyParseError {
    /// Returns true when the reply could not be parsed as JSON at all.
    pub fn is_not_json(&self) -> bool {
        matches!(self, ReplyParseError::NotJson(_))
    }
}
