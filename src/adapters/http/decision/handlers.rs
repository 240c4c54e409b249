//! HTTP handlers for decision and coach endpoints.
//!
//! These handlers connect Axum routes to the application layer command handler.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::info;

use crate::application::{
    AnalyzeDecisionError, AnalyzeDecisionHandler, CoachTurnError, CoachTurnHandler,
};
use crate::ports::AIProvider;

use super::dto::{
    CoachReply, CoachRequest, DecisionRequest, DecisionResponse, ErrorResponse, HealthResponse,
};

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "northform-brain";

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Decision API error that implements IntoResponse.
#[derive(Debug)]
pub enum DecisionApiError {
    BadRequest(String),
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for DecisionApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DecisionApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DecisionApiError::BadGateway(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::bad_gateway(msg))
            }
            DecisionApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<AnalyzeDecisionError> for DecisionApiError {
    fn from(error: AnalyzeDecisionError) -> Self {
        match error {
            AnalyzeDecisionError::Validation(e) => DecisionApiError::BadRequest(e.to_string()),
            AnalyzeDecisionError::Reply(e) if e.is_not_json() => {
                DecisionApiError::BadGateway(e.to_string())
            }
            other => DecisionApiError::Internal(other.to_string()),
        }
    }
}

impl From<CoachTurnError> for DecisionApiError {
    fn from(error: CoachTurnError) -> Self {
        match error {
            CoachTurnError::Reply(e) if e.is_not_json() => {
                DecisionApiError::BadGateway(e.to_string())
            }
            other => DecisionApiError::Internal(other.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing decision dependencies.
#[derive(Clone)]
pub struct DecisionAppState {
    pub provider: Arc<dyn AIProvider>,
}

impl DecisionAppState {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    pub fn analyze_decision_handler(&self) -> AnalyzeDecisionHandler {
        AnalyzeDecisionHandler::new(self.provider.clone())
    }

    pub fn coach_turn_handler(&self) -> CoachTurnHandler {
        CoachTurnHandler::new(self.provider.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health(State(state): State<DecisionAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: SERVICE_NAME.to_string(),
        model: state.provider.provider_info().model,
    })
}

/// Analyze a decision.
///
/// POST /analyze/decision
pub async fn analyze_decision(
    State(state): State<DecisionAppState>,
    Json(request): Json<DecisionRequest>,
) -> Result<Json<DecisionResponse>, DecisionApiError> {
    info!(options = request.options.len(), "decision analysis requested");

    let response = state.analyze_decision_handler().handle(request).await?;
    Ok(Json(response))
}

/// Run one onboarding coach turn.
///
/// POST /analyze/coach
pub async fn coach_turn(
    State(state): State<DecisionAppState>,
    Json(request): Json<CoachRequest>,
) -> Result<Json<CoachReply>, DecisionApiError> {
    info!(
        has_profile = request.profile.is_some(),
        "coach turn requested"
    );

    let reply = state.coach_turn_handler().handle(request).await?;
    Ok(Json(reply))
}
