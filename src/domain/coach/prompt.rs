//! Prompt templating for coach turns.

use super::request::CoachRequest;

/// System instruction for the onboarding guide persona.
pub const COACH_INSTRUCTIONS: &str = r#"You are NorthForm's onboarding guide.
Task: Read USER message and update a JSON "profilePatch" capturing: values[], antiValues[], lifeVision, goal90d, goal12m, nonNegs[], constraints[], decisionStyle, biasNotes, and any convo snippets (conv: {fam, frd, wrk}) you infer.
Rules:
- Return STRICT JSON with keys: reply (string), profilePatch (object).
- The "reply" should be warm, concise, and ask one useful follow-up question.
- Be conservative in updates (only fill what you’re confident about).
- NEVER include PII the user didn’t provide."#;

/// Renders the user turn: the current profile as compact JSON, then the message.
pub fn render_coach_prompt(request: &CoachRequest) -> String {
    let profile = request
        .profile
        .as_ref()
        .and_then(|p| serde_json::to_string(p).ok())
        .unwrap_or_else(|| "{}".to_string());

    format!(
        "CurrentProfile (partial): {}\nUserMessage: {}",
        profile, request.message
    )
}
