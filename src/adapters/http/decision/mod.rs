//! Decision HTTP adapter - REST API for decision analysis.
//!
//! Provides endpoints for:
//! - Service health
//! - Analyzing a decision against the upstream model

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse};
pub use handlers::{DecisionApiError, DecisionAppState, SERVICE_NAME};
pub use routes::decision_router;
