//! Integration tests for the decision HTTP endpoints.
//!
//! These tests drive the full service router (routes + CORS + tracing layers)
//! with a mock upstream provider:
//! 1. Status codes for each failure class (400 / 502 / 500)
//! 2. Successful replies are passed through unchanged
//! 3. Rejected requests never reach the upstream provider

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use proptest::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use northform_brain::adapters::ai::MockAIProvider;
use northform_brain::adapters::http::{app_router, DecisionAppState};
use northform_brain::config::ServerConfig;
use northform_brain::ports::{AIError, ProviderInfo};

// =============================================================================
// Test Infrastructure
// =============================================================================

const LEAVE: &str = r#"{"recommendation":"Leave","reasoning":[],"emotional_drivers":[],"neural_pathway_shift":[],"confidence":70,"suggestedNextSteps":[]}"#;

fn app_with(provider: &MockAIProvider) -> Router {
    let state = DecisionAppState::new(Arc::new(provider.clone()));
    app_router(state, &ServerConfig::default())
}

fn analyze_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/analyze/decision")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn switch_careers() -> Value {
    json!({
        "decision": "Switch careers",
        "options": ["Stay", "Leave"],
        "userInputs": {"lifeScenarios": [], "decisionStyle": null}
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn well_formed_reply_is_returned_verbatim() {
    let provider = MockAIProvider::new().with_response(LEAVE);

    let (status, body) = send(app_with(&provider), analyze_request(&switch_careers())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::from_str::<Value>(LEAVE).unwrap());
}

#[tokio::test]
async fn out_of_range_confidence_is_not_clamped() {
    let reply = json!({
        "recommendation": "Stay",
        "reasoning": ["Stability matters now"],
        "emotional_drivers": ["fear of regret"],
        "neural_pathway_shift": ["5-minute somatic reset before deciding"],
        "confidence": 250,
        "suggestedNextSteps": ["What is your runway in months?"]
    });
    let provider = MockAIProvider::new().with_response(reply.to_string());

    let (status, body) = send(app_with(&provider), analyze_request(&switch_careers())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, reply);
}

#[tokio::test]
async fn upstream_receives_rendered_prompt() {
    let provider = MockAIProvider::new().with_response(LEAVE);

    send(app_with(&provider), analyze_request(&switch_careers())).await;

    let calls = provider.get_calls();
    assert_eq!(calls.len(), 1);
    let prompt = &calls[0].messages[0].content;
    assert!(prompt.contains("- Stay\n- Leave"));
    assert!(prompt.contains("- Decision style: unspecified"));
    assert!(prompt.contains("- Scenarios: unspecified"));
}

#[tokio::test]
async fn single_option_is_bad_request_without_upstream_call() {
    let provider = MockAIProvider::new().with_response(LEAVE);
    let body = json!({"decision": "Switch careers", "options": ["Stay"], "userInputs": {}});

    let (status, json) = send(app_with(&provider), analyze_request(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Provide at least two options.");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn empty_decision_text_is_accepted() {
    let provider = MockAIProvider::new().with_response(LEAVE);
    let body = json!({"decision": "", "options": ["a", "b"], "userInputs": {}});

    let (status, _) = send(app_with(&provider), analyze_request(&body)).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_json_reply_is_bad_gateway() {
    let provider = MockAIProvider::new().with_response("not json");

    let (status, body) = send(app_with(&provider), analyze_request(&switch_careers())).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].as_str().unwrap().contains("not valid JSON"));
}

#[tokio::test]
async fn missing_field_is_internal_error() {
    let reply = json!({
        "recommendation": "Leave",
        "reasoning": [],
        "emotional_drivers": [],
        "confidence": 70,
        "suggestedNextSteps": []
    });
    let provider = MockAIProvider::new().with_response(reply.to_string());

    let (status, body) = send(app_with(&provider), analyze_request(&switch_careers())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("neural_pathway_shift"));
}

#[tokio::test]
async fn provider_failure_is_internal_error_and_single_attempt() {
    let provider = MockAIProvider::new()
        .with_error(AIError::network("Connection failed: refused"))
        .with_response(LEAVE);

    let (status, body) = send(app_with(&provider), analyze_request(&switch_careers())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "network error: Connection failed: refused");
    assert_eq!(provider.call_count(), 1);
}

fn coach_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/analyze/coach")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn coach_turn_round_trips_reply_and_patch() {
    let reply = json!({
        "reply": "Sounds like rest matters. What does a good Sunday look like?",
        "profilePatch": {"values": ["rest"], "conv": {"fam": "wants more dinners together"}}
    });
    let provider = MockAIProvider::new().with_response(reply.to_string());
    let body = json!({"message": "I'm exhausted lately", "profile": {"lifeVision": "slower life"}});

    let (status, json) = send(app_with(&provider), coach_request(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, reply);
    let prompt = &provider.get_calls()[0].messages[0].content;
    assert!(prompt.starts_with(r#"CurrentProfile (partial): {"lifeVision":"slower life"}"#));
}

#[tokio::test]
async fn coach_non_json_reply_is_bad_gateway() {
    let provider = MockAIProvider::new().with_response("Happy to help!");

    let (status, body) = send(app_with(&provider), coach_request(&json!({"message": "hi"}))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "BAD_GATEWAY");
}

#[tokio::test]
async fn coach_provider_failure_is_internal_error() {
    let provider =
        MockAIProvider::new().with_error(AIError::authentication_failed(401, "invalid x-api-key"));

    let (status, body) = send(app_with(&provider), coach_request(&json!({"message": "hi"}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "authentication failed (401): invalid x-api-key");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn health_reports_model() {
    let provider = MockAIProvider::new()
        .with_provider_info(ProviderInfo::new("anthropic", "claude-3-5-sonnet-20240620"));
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(app_with(&provider), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "northform-brain");
    assert_eq!(body["model"], "claude-3-5-sonnet-20240620");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn concurrent_requests_do_not_wait_on_each_other() {
    let provider = MockAIProvider::new()
        .with_response(LEAVE)
        .with_response(LEAVE)
        .with_response(LEAVE)
        .with_delay(Duration::from_millis(200));
    let app = app_with(&provider);

    let start = Instant::now();
    let (a, b, c) = tokio::join!(
        send(app.clone(), analyze_request(&switch_careers())),
        send(app.clone(), analyze_request(&switch_careers())),
        send(app, analyze_request(&switch_careers())),
    );

    assert_eq!(a.0, StatusCode::OK);
    assert_eq!(b.0, StatusCode::OK);
    assert_eq!(c.0, StatusCode::OK);
    assert_eq!(provider.call_count(), 3);
    assert!(start.elapsed() < Duration::from_millis(600));
}

#[tokio::test]
async fn simple_request_from_allowed_origin_gets_cors_headers() {
    let provider = MockAIProvider::new().with_response(LEAVE);
    let mut request = analyze_request(&switch_careers());
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://127.0.0.1:5173".parse().unwrap());

    let response = app_with(&provider).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://127.0.0.1:5173"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fewer_than_two_options_always_rejected(
        decision in ".{0,30}",
        options in proptest::collection::vec(".{0,10}", 0..2),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let provider = MockAIProvider::new().with_response(LEAVE);
        let body = json!({"decision": decision, "options": options, "userInputs": {}});

        let (status, _) = runtime.block_on(send(app_with(&provider), analyze_request(&body)));

        prop_assert_eq!(status, StatusCode::BAD_REQUEST);
        prop_assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn non_json_reply_always_bad_gateway(
        reply in "x[a-zA-Z ]{0,40}",
        options in proptest::collection::vec("[a-z]{1,8}", 2..5),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let provider = MockAIProvider::new().with_response(reply);
        let body = json!({"decision": "d", "options": options, "userInputs": {}});

        let (status, _) = runtime.block_on(send(app_with(&provider), analyze_request(&body)));

        prop_assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
