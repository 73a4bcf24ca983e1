use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

/// Health check endpoint, with enough state to tell whether the configured
/// dictionary was picked up
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "word-search-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "dictionary_words": state.dictionary.len(),
        "active_sessions": state.sessions.len(),
    }))
}
