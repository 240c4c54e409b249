//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Upstream language model providers (Anthropic, mock)
//! - `http` - Axum REST API

pub mod ai;
pub mod http;
