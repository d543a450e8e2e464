mod billing;
mod cache;
mod config;
mod db;
mod errors;
mod extract;
mod models;
mod providers;
mod quota;
mod routes;
mod state;
mod summaries;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::models::plan::PlanCatalog;
use crate::providers::{gemini::GeminiProvider, openai::OpenAiProvider, SummaryProvider};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Condense API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize Redis (summary list/detail cache invalidation after writes)
    let redis = redis::Client::open(config.redis_url.clone())?;
    info!("Redis client initialized");

    // One shared HTTP client for PDF fetches and both summarization backends
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .expect("Failed to build HTTP client");

    // Summarization providers: Gemini first, OpenAI as the one-shot fallback
    let primary: Arc<dyn SummaryProvider> = Arc::new(GeminiProvider::new(
        http.clone(),
        config.gemini_api_key.clone(),
    ));
    let secondary: Arc<dyn SummaryProvider> = Arc::new(OpenAiProvider::new(
        http.clone(),
        config.openai_api_key.clone(),
    ));
    info!(
        "Summarization providers initialized (primary: {}, secondary: {})",
        providers::gemini::MODEL,
        providers::openai::MODEL
    );

    // Pricing plans are injected from config, not baked into a constant table
    let plans = Arc::new(PlanCatalog::from_config(&config));

    // Build app state
    let state = AppState {
        db,
        redis,
        http,
        primary,
        secondary,
        plans,
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
