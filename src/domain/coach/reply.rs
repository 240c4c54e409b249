//! Coach reply parsed from the model output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::decision::ReplyParseError;

/// What the coach says back, plus the profile fields it inferred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachReply {
    pub reply: String,
    /// Fields to merge into the caller's profile. Missing means nothing inferred.
    #[serde(rename = "profilePatch", default)]
    pub profile_patch: Map<String, Value>,
}

impl CoachReply {
    /// Parses the model's raw reply text, with the same syntax/schema split as
    /// decision replies.
    pub fn from_reply(text: &str) -> Result<Self, ReplyParseError> {
        let value: Value = serde_json::from_str(text).map_err(ReplyParseError::NotJson)?;
        serde_json::from_value(value).map_err(ReplyParseError::SchemaMismatch)
    }
}
