//! Structured advice parsed from the model reply.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ReplyParseError;

/// The advice returned to the caller.
///
/// Field names match the JSON contract in the system instructions; note the mix of
/// snake_case and camelCase is part of that contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub recommendation: String,
    pub reasoning: Vec<String>,
    pub emotional_drivers: Vec<String>,
    pub neural_pathway_shift: Vec<String>,
    /// Intended range is 0-100; values outside it are passed through untouched.
    #[serde(deserialize_with = "integral_number")]
    pub confidence: i128,
    #[serde(rename = "suggestedNextSteps")]
    pub suggested_next_steps: Vec<String>,
}

impl DecisionResponse {
    /// Parses the model's raw reply text.
    ///
    /// Syntax errors and schema errors are reported separately: the former means
    /// the model ignored the JSON-only directive, the latter that it returned the
    /// wrong shape. Unknown keys are ignored.
    pub fn from_reply(text: &str) -> Result<Self, ReplyParseError> {
        let value: Value = serde_json::from_str(text).map_err(ReplyParseError::NotJson)?;
        serde_json::from_value(value).map_err(ReplyParseError::SchemaMismatch)
    }
}

/// Accepts `70`, `70.0` and integers beyond the 64-bit range; rejects `70.5`
/// and non-numbers.
fn integral_number<'de, D>(deserializer: D) -> Result<i128, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_i64() {
        return Ok(n.into());
    }
    if let Some(n) = number.as_u64() {
        return Ok(n.into());
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i128::MIN as f64 && f < i128::MAX as f64 => {
            Ok(f as i128)
        }
        _ => Err(de::Error::custom(format!(
            "confidence must be an integer, got {number}"
        ))),
    }
}
