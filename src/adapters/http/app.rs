//! Service router assembly: routes, CORS and request tracing.

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::decision::{decision_router, DecisionAppState};

/// Builds the complete service router.
pub fn app_router(state: DecisionAppState, server: &ServerConfig) -> Router {
    decision_router()
        .with_state(state)
        .layer(cors_layer(&server.allowed_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy: explicit origin allow-list, any method and header, credentials on.
///
/// Wildcards are not allowed together with credentials, so methods and headers
/// are mirrored from the preflight request instead. Origins that are not valid
/// header values are skipped; `ServerConfig::validate` rejects them at startup.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
