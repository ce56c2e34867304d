mod assessment;
mod auth;
mod config;
mod errors;
mod jobs;
mod llm_client;
mod models;
mod routes;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::evaluator::AnswerEvaluator;
use crate::config::Config;
use crate::llm_client::{OpenAiClient, SamplingParams};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log level can come from it
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EvolvPath API v{}", env!("CARGO_PKG_VERSION"));

    if config.openai.uses_placeholder_key() {
        warn!("OPENAI_API_KEY is not set; every assessment will return the fallback evaluation");
    }

    // Initialize completion client + evaluator
    let llm = OpenAiClient::new(&config.openai).context("Failed to build HTTP client")?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm.model(),
        config.openai.timeout_secs
    );

    let evaluator = AnswerEvaluator::new(
        Arc::new(llm),
        SamplingParams {
            max_tokens: config.openai.max_tokens,
            temperature: config.openai.temperature,
        },
    );

    let state = AppState {
        evaluator: Arc::new(evaluator),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
