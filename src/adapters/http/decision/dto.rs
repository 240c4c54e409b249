//! HTTP DTOs for decision and coach endpoints.
//!
//! The domain request/response types already serialize to the wire contract,
//! so we re-export them directly.

pub use crate::domain::coach::{CoachReply, CoachRequest};
pub use crate::domain::decision::{DecisionRequest, DecisionResponse, UserContext};

use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub model: String,
}

/// Standard error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            detail: detail.into(),
        }
    }

    pub fn bad_gateway(detail: impl Into<String>) -> Self {
        Self {
            code: "BAD_GATEWAY".to_string(),
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            detail: detail.into(),
        }
    }
}
