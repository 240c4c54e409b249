//! NorthForm Brain - Decision advisor service
//!
//! This crate exposes a single HTTP endpoint that renders a user's decision and
//! psychographic context into a prompt, asks an upstream language model for a
//! structured JSON analysis, and validates that reply before returning it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
