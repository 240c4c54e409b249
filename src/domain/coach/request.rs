//! Inbound coach turn.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One onboarding message from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachRequest {
    /// What the user just said.
    pub message: String,
    /// Profile fields gathered on earlier turns. Absent or `null` means empty.
    #[serde(default)]
    pub profile: Option<Map<String, Value>>,
}

impl CoachRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            profile: None,
        }
    }

    /// Sets the partial profile.
    pub fn with_profile(mut self, profile: Map<String, Value>) -> Self {
        self.profile = Some(profile);
        self
    }
}
