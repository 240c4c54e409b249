//! HTTP adapters - REST API implementations.
//!
//! `app` assembles the full service router (routes plus CORS and tracing
//! layers); each endpoint group lives in its own module.

pub mod app;
pub mod decision;

pub use app::{app_router, cors_layer};
pub use decision::{decision_router, DecisionAppState, SERVICE_NAME};
