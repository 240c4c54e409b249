//! Inbound decision request and the user's psychographic context.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::DecisionValidationError;

/// Minimum number of options a decision must offer.
pub const MIN_OPTIONS: usize = 2;

/// Psychographic context attached to a decision.
///
/// Every field is optional; missing values render as `unspecified` in the prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    /// Life scenarios the user identifies with, in the order given.
    #[serde(default)]
    pub life_scenarios: Vec<String>,
    /// How the user tends to decide (e.g. "analytical", "gut-first").
    #[serde(default)]
    pub decision_style: Option<String>,
    /// Free-text long-term vision.
    #[serde(default)]
    pub life_vision: Option<String>,
    /// Areas of life the user is focusing on, in the order given.
    #[serde(default)]
    pub focus_areas: Vec<String>,
    /// Arbitrary social signals (e.g. feedback from friends).
    #[serde(default)]
    pub social_signals: Option<Map<String, Value>>,
    /// Arbitrary biometric readings (e.g. HRV, sleep).
    #[serde(default)]
    pub biometrics: Option<Map<String, Value>>,
}

/// A decision the user wants analysed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    /// The decision being faced. May be empty.
    pub decision: String,
    /// Candidate options, in the order given.
    pub options: Vec<String>,
    /// Context about the user.
    pub user_inputs: UserContext,
}

impl DecisionRequest {
    /// Creates a request with an empty context.
    pub fn new(decision: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            decision: decision.into(),
            options,
            user_inputs: UserContext::default(),
        }
    }

    /// Sets the user context.
    pub fn with_user_inputs(mut self, user_inputs: UserContext) -> Self {
        self.user_inputs = user_inputs;
        self
    }

    /// Checks the request is fit to send upstream.
    ///
    /// Only the option count is checked; an empty `decision` is accepted.
    pub fn validate(&self) -> Result<(), DecisionValidationError> {
        if self.options.len() < MIN_OPTIONS {
            return Err(DecisionValidationError::InsufficientOptions {
                provided: self.options.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_payload() {
        let request: DecisionRequest = serde_json::from_value(json!({
            "decision": "Switch careers",
            "options": ["Stay", "Leave"],
            "userInputs": {
                "lifeScenarios": ["new parent"],
                "decisionStyle": "analytical",
                "lifeVision": "calm and creative",
                "focusAreas": ["career", "health"],
                "socialSignals": {"partner": "supportive"},
                "biometrics": {"hrv": 42}
            }
        }))
        .unwrap();

        assert_eq!(request.options, vec!["Stay", "Leave"]);
        assert_eq!(request.user_inputs.life_scenarios, vec!["new parent"]);
        assert_eq!(request.user_inputs.decision_style.as_deref(), Some("analytical"));
        assert_eq!(request.user_inputs.focus_areas, vec!["career", "health"]);
        assert_eq!(
            request.user_inputs.biometrics.unwrap().get("hrv"),
            Some(&json!(42))
        );
    }

    #[test]
    fn empty_user_inputs_default_every_field() {
        let request: DecisionRequest = serde_json::from_value(json!({
            "decision": "x",
            "options": ["a", "b"],
            "userInputs": {}
        }))
        .unwrap();

        assert_eq!(request.user_inputs, UserContext::default());
    }

    #[test]
    fn null_optionals_are_accepted() {
        let request: DecisionRequest = serde_json::from_value(json!({
            "decision": "x",
            "options": ["a", "b"],
            "userInputs": {"decisionStyle": null, "socialSignals": null}
        }))
        .unwrap();

        assert!(request.user_inputs.decision_style.is_none());
        assert!(request.user_inputs.social_signals.is_none());
    }

    #[test]
    fn missing_user_inputs_is_rejected() {
        let result = serde_json::from_value::<DecisionRequest>(json!({
            "decision": "x",
            "options": ["a", "b"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_fewer_than_two_options() {
        let none = DecisionRequest::new("x", vec![]);
        let one = DecisionRequest::new("x", vec!["only".to_string()]);

        assert_eq!(
            none.validate(),
            Err(DecisionValidationError::InsufficientOptions { provided: 0 })
        );
        assert_eq!(
            one.validate(),
            Err(DecisionValidationError::InsufficientOptions { provided: 1 })
        );
    }

    #[test]
    fn validate_accepts_empty_decision_text() {
        let request = DecisionRequest::new("", vec!["a".to_string(), "b".to_string()]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn insufficient_options_message_is_human_readable() {
        let err = DecisionRequest::new("x", vec![]).validate().unwrap_err();
        assert_eq!(err.to_string(), "Provide at least two options.");
        assert_eq!(
            err,
            DecisionValidationError::InsufficientOptions { provided: 0 }
        );
    }
}
