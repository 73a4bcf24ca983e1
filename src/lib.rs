pub mod config;
pub mod dictionary;
pub mod effects;
pub mod game;
pub mod models;
pub mod routes;
pub mod utils;
pub mod websocket;

use std::sync::Arc;

use axum::{routing::get, Router};
use config::Config;
use dashmap::DashMap;
use dictionary::Dictionary;
use game::{GameSession, PuzzleSettings};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use uuid::Uuid;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: Dictionary,
    /// Settings for games the client did not configure
    pub default_settings: PuzzleSettings,
    /// One game per open WebSocket connection
    pub sessions: DashMap<Uuid, GameSession>,
}

/// Load the configured word list, falling back to the built-in one
pub async fn load_dictionary(config: &Config) -> Dictionary {
    let Some(path) = &config.game.dictionary_path else {
        tracing::info!("No DICTIONARY_PATH set, using built-in word list");
        return Dictionary::builtin();
    };

    match Dictionary::load(path).await {
        Ok(dict) if !dict.is_empty() => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Ok(_) => {
            tracing::warn!("Dictionary {} is empty. Using built-in word list.", path);
            Dictionary::builtin()
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {}. Using built-in word list.",
                e
            );
            Dictionary::builtin()
        }
    }
}

pub fn build_router(state: Arc<AppState>, static_dir: &str) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve frontend static files
    let frontend_service = ServeDir::new(static_dir);

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        // API routes
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
