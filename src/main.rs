//! NorthForm Brain server binary.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use northform_brain::adapters::ai::{AnthropicConfig, AnthropicProvider};
use northform_brain::adapters::http::{app_router, DecisionAppState};
use northform_brain::config::{AppConfig, ValidationError};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[northform-brain] startup aborted: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let api_key = config
        .ai
        .anthropic_api_key
        .clone()
        .ok_or(ValidationError::MissingRequired("ANTHROPIC_API_KEY"))?;

    let provider = AnthropicProvider::new(
        AnthropicConfig::new(api_key)
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    );
    let state = DecisionAppState::new(Arc::new(provider));
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        origins = ?config.server.allowed_origins_list(),
        "northform-brain listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
