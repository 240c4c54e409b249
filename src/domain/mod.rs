//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `decision` - Decision request/response types, validation and prompt rendering
//! - `coach` - Onboarding coach turns and profile patches

pub mod coach;
pub mod decision;
