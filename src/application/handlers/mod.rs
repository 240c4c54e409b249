//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod coach;
pub mod decision;

pub use coach::{CoachTurnCommand, CoachTurnError, CoachTurnHandler, CoachTurnResult};
pub use decision::{
    AnalyzeDecisionCommand, AnalyzeDecisionError, AnalyzeDecisionHandler, AnalyzeDecisionResult,
    GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE,
};
