use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use briefdesk_api::config::Config;
use briefdesk_api::llm_client::LlmClient;
use briefdesk_api::routes::{build_router, cors_layer};
use briefdesk_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("briefdesk_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Briefdesk API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client — the key stays server-side, callers never see it
    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.model.clone());
    info!("LLM client initialized (model: {})", llm.model());

    let state = AppState {
        invoker: Arc::new(llm),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");
    info!("API endpoints:");
    info!("   POST /api/summarize");
    info!("   POST /api/summarize-batch");
    info!("   POST /api/brief");
    info!("   GET  /api/health");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
