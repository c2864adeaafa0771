mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod questions;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::questions::chunker::ChunkerConfig;
use crate::questions::scorer::SelectorConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Interview Questions API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Initialize LLM client — no local models, fast startup
    let llm = LlmClient::new(config.groq_api_key.clone(), config.llm_timeout_secs);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state; pipeline thresholds are explicit config, not statics
    let state = AppState {
        llm,
        config: config.clone(),
        chunker: ChunkerConfig::default(),
        selector: SelectorConfig::default(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
