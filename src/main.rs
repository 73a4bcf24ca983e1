use std::sync::Arc;

use anyhow::Result;
use dashmap::DashMap;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_search_backend::{build_router, config::Config, load_dictionary, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word search backend server...");

    // Load configuration
    let config = Config::from_env()?;
    let default_settings = config.default_settings()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let dictionary = load_dictionary(&config).await;

    // Create application state
    let state = Arc::new(AppState {
        config: config.clone(),
        dictionary,
        default_settings,
        sessions: DashMap::new(),
    });

    let app = build_router(state, &config.server.static_dir);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Game frontend: http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
