//! CoachTurnHandler - Command handler for one onboarding coach turn.
//!
//! render prompt → call upstream model → parse reply. No validation stage: any
//! message string is forwarded. Nothing is retried.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::application::handlers::decision::{GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE};
use crate::domain::coach::{render_coach_prompt, CoachReply, CoachRequest, COACH_INSTRUCTIONS};
use crate::domain::decision::ReplyParseError;
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole};

/// Command for one coach turn.
pub type CoachTurnCommand = CoachRequest;

/// Result of a coach turn.
pub type CoachTurnResult = CoachReply;

/// Errors from a coach turn.
#[derive(Debug, Error)]
pub enum CoachTurnError {
    #[error(transparent)]
    Provider(#[from] AIError),

    #[error(transparent)]
    Reply(#[from] ReplyParseError),
}

/// Handler for coach turns.
pub struct CoachTurnHandler {
    provider: Arc<dyn AIProvider>,
}

impl CoachTurnHandler {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    /// Builds the completion request for a coach turn.
    pub fn completion_request(command: &CoachTurnCommand) -> CompletionRequest {
        CompletionRequest::new()
            .with_system_prompt(COACH_INSTRUCTIONS)
            .with_message(MessageRole::User, render_coach_prompt(command))
            .with_max_tokens(GENERATION_MAX_TOKENS)
            .with_temperature(GENERATION_TEMPERATURE)
    }

    pub async fn handle(
        &self,
        command: CoachTurnCommand,
    ) -> Result<CoachTurnResult, CoachTurnError> {
        let request = Self::completion_request(&command);
        debug!(
            profile_keys = command.profile.as_ref().map_or(0, |p| p.len()),
            "calling upstream model for coach turn"
        );

        let completion = self.provider.complete(request).await.map_err(|e| {
            warn!(error = %e, "coach model call failed");
            e
        })?;
        debug!(
            model = %completion.model,
            prompt_tokens = completion.usage.prompt_tokens,
            completion_tokens = completion.usage.completion_tokens,
            "coach model replied"
        );

        CoachReply::from_reply(&completion.content).map_err(|e| {
            warn!(error = %e, not_json = e.is_not_json(), "coach reply rejected");
            e.into()
        })
    }
}
