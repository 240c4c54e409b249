//! Prompt templating for the upstream model.
//!
//! [`SYSTEM_INSTRUCTIONS`] carries the persona and the JSON contract the model must
//! honour; [`render_prompt`] turns a [`DecisionRequest`] into the user turn.

use serde_json::{Map, Value};

use super::request::DecisionRequest;

/// Placeholder for context fields the user left empty.
pub const UNSPECIFIED: &str = "unspecified";

/// Fixed system instruction sent with every completion request.
pub const SYSTEM_INSTRUCTIONS: &str = r#"You are NorthForm's cognitive engine.
You synthesize: Internal Family Systems (IFS), Big Five, Enneagram, Strengths, CBT/REBT, habit loops, motivation science,
emotion regulation (HRV, interoception), and decision science (Bayesian thinking, expected value, regret minimization).
You are precise, compassionate, and practical. Avoid generic advice. Use the user's inputs deeply.

Always return JSON that EXACTLY matches the required schema:
{
  "recommendation": string,
  "reasoning": [string, ...],
  "emotional_drivers": [string, ...],
  "neural_pathway_shift": [string, ...],
  "confidence": integer 0-100,
  "suggestedNextSteps": [string, ...]
}

Rules:
- Compare options against user values, constraints, and context.
- Surface cognitive biases explicitly when relevant (but as concise bullets).
- Translate psychology into concrete next actions.
- Quantify confidence (0–100) and justify it.
- If inputs are thin, ask for *exactly the missing info* in one bullet within suggestedNextSteps.
"#;

/// Renders the user-turn prompt for a decision.
///
/// Deterministic: the same request always yields byte-identical text.
pub fn render_prompt(request: &DecisionRequest) -> String {
    let ctx = &request.user_inputs;

    let options = request
        .options
        .iter()
        .map(|o| format!("- {o}"))
        .collect::<Vec<_>>()
        .join("\n");

    let decision_style = or_unspecified(ctx.decision_style.as_deref().unwrap_or_default());
    let life_vision = or_unspecified(ctx.life_vision.as_deref().unwrap_or_default());
    let scenarios = ctx.life_scenarios.join(", ");
    let scenarios = or_unspecified(&scenarios);
    let focus = ctx.focus_areas.join(", ");
    let focus = or_unspecified(&focus);
    let social = render_signals(ctx.social_signals.as_ref());
    let biometrics = render_signals(ctx.biometrics.as_ref());

    format!(
        "
User Decision:
{decision}

Options:
{options}

User Context:
- Decision style: {decision_style}
- Life vision: {life_vision}
- Scenarios: {scenarios}
- Focus areas: {focus}

Signals:
- Social (optional): {social}
- Biometrics (optional): {biometrics}

Task:
Apply IFS, Big Five, Enneagram, strengths & values alignment,
decision science, and behavior change science.
Resolve internal conflicts; identify emotional drivers; propose neural pathway shifts
(habits, reframes, exposure ladders, somatic resets, environmental design).

Return JSON ONLY following the schema. Be specific and non-generic.
",
        decision = request.decision,
    )
}

fn or_unspecified(value: &str) -> &str {
    if value.is_empty() {
        UNSPECIFIED
    } else {
        value
    }
}

/// Compact JSON; keys come out sorted, so output is stable.
fn render_signals(signals: Option<&Map<String, Value>>) -> String {
    match signals {
        Some(map) => Value::Object(map.clone()).to_string(),
        None => "{}".to_string(),
    }
}
