//! Decision handlers.

mod analyze_decision;

pub use analyze_decision::{
    AnalyzeDecisionCommand, AnalyzeDecisionError, AnalyzeDecisionHandler, AnalyzeDecisionResult,
    GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE,
};
