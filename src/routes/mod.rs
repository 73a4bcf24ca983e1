pub mod health;
pub mod puzzles;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/puzzles", get(puzzles::generate_puzzle))
        .route("/dictionary", get(puzzles::dictionary_info))
}
