//! AnalyzeDecisionHandler - Command handler for decision analysis.
//!
//! Drives one request through its whole lifecycle:
//! validate → render prompt → call upstream model → parse reply.
//! Any stage may end the request with an error; nothing is retried.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::decision::{
    render_prompt, DecisionRequest, DecisionResponse, DecisionValidationError, ReplyParseError,
    SYSTEM_INSTRUCTIONS,
};
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole};

/// Output token budget for every analysis.
pub const GENERATION_MAX_TOKENS: u32 = 1000;

/// Sampling temperature for every analysis.
pub const GENERATION_TEMPERATURE: f32 = 0.6;

/// Command to analyze a decision.
pub type AnalyzeDecisionCommand = DecisionRequest;

/// Result of a successful analysis.
pub type AnalyzeDecisionResult = DecisionResponse;

/// Errors from analyzing a decision.
#[derive(Debug, Error)]
pub enum AnalyzeDecisionError {
    /// Request rejected before any upstream call.
    #[error(transparent)]
    Validation(#[from] DecisionValidationError),

    /// Transport, authentication or provider-side failure.
    #[error(transparent)]
    Provider(#[from] AIError),

    /// Upstream reply could not be turned into a response.
    #[error(transparent)]
    Reply(#[from] ReplyParseError),
}

/// Handler for decision analysis.
pub struct AnalyzeDecisionHandler {
    provider: Arc<dyn AIProvider>,
}

impl AnalyzeDecisionHandler {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    /// Builds the completion request for a validated decision.
    pub fn completion_request(command: &AnalyzeDecisionCommand) -> CompletionRequest {
        CompletionRequest::new()
            .with_system_prompt(SYSTEM_INSTRUCTIONS)
            .with_message(MessageRole::User, render_prompt(command))
            .with_max_tokens(GENERATION_MAX_TOKENS)
            .with_temperature(GENERATION_TEMPERATURE)
    }

    pub async fn handle(
        &self,
        command: AnalyzeDecisionCommand,
    ) -> Result<AnalyzeDecisionResult, AnalyzeDecisionError> {
        command.validate()?;

        let request = Self::completion_request(&command);
        debug!(options = command.options.len(), "calling upstream model");

        let completion = self.provider.complete(request).await.map_err(|e| {
            warn!(error = %e, "upstream model call failed");
            e
        })?;
        debug!(
            model = %completion.model,
            prompt_tokens = completion.usage.prompt_tokens,
            completion_tokens = completion.usage.completion_tokens,
            finish_reason = ?completion.finish_reason,
            "upstream model replied"
        );

        DecisionResponse::from_reply(&completion.content).map_err(|e| {
            warn!(error = %e, not_json = e.is_not_json(), "upstream reply rejected");
            e.into()
        })
    }
}
