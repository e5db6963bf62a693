//! Tense Drill - A state-managed HTTP service for English verb-tense practice
//!
//! This is the main entry point for the tense-drill application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use tense_drill::{
    config::Config,
    state::{AppState, PracticeSession},
    api::create_router,
    services::CompletionClient,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("tense_drill={},tower_http=info", config.log_level()))
        .init();

    info!("Starting tense-drill server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, endpoint={}, max_tokens={}, locale={:?}",
          config.host, config.port, config.endpoint, config.max_tokens, config.locale);

    let client = CompletionClient::new(config.endpoint.clone(), config.model.clone(), config.max_tokens);
    let session = PracticeSession::new(client, config.locale);
    let state = Arc::new(AppState::new(session, config.port, config.host.clone()));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /tenses   - List tenses and their selection");
    info!("  POST /tenses   - Enable or disable a tense");
    info!("  POST /generate - Generate a phrase in the selected tenses");
    info!("  POST /correct  - Check an answer");
    info!("  GET  /status   - Current session status");
    info!("  GET  /banner   - Status banner as plain text");
    info!("  GET  /events   - Status updates (server-sent events)");
    info!("  GET  /health   - Health check");

    // Event streams stay open until the client leaves; do not wait for them
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
