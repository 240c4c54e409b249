//! Axum router configuration for decision endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze_decision, coach_turn, health, DecisionAppState};

/// Create the decision API router.
///
/// # Routes
///
/// - `GET /health` - Liveness plus the configured model
/// - `POST /analyze/decision` - Analyze a decision
/// - `POST /analyze/coach` - One onboarding coach turn
///
/// # Example
///
/// ```ignore
/// use crate::adapters::http::decision::{decision_router, DecisionAppState};
///
/// let app = decision_router().with_state(DecisionAppState::new(provider));
/// ```
pub fn decision_router() -> Router<DecisionAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/analyze/decision", post(analyze_decision))
        .route("/analyze/coach", post(coach_turn))
}
