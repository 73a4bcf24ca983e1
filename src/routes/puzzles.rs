use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::{
    game::{GameError, PuzzleGenerator},
    models::Puzzle,
    utils::letters::FILLER_ALPHABET,
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct PuzzleQuery {
    pub num_words: Option<usize>,
    pub grid_size: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryInfo {
    pub words: usize,
    pub filler_alphabet: Vec<char>,
    pub default_grid_size: usize,
    pub default_num_words: usize,
    pub max_grid_size: usize,
    pub max_num_words: usize,
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Generate a one-off puzzle without starting a session
pub async fn generate_puzzle(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PuzzleQuery>,
) -> Result<Json<Puzzle>, GameError> {
    let settings = state.default_settings.with_overrides(
        query.num_words,
        query.grid_size,
        state.config.limits(),
    )?;

    let puzzle = PuzzleGenerator::generate(&state.dictionary, settings);
    tracing::debug!(
        "Generated {}x{} puzzle with {} of {} words",
        settings.grid_size(),
        settings.grid_size(),
        puzzle.words.len(),
        settings.num_words()
    );

    Ok(Json(puzzle))
}

pub async fn dictionary_info(State(state): State<Arc<AppState>>) -> Json<DictionaryInfo> {
    Json(DictionaryInfo {
        words: state.dictionary.len(),
        filler_alphabet: FILLER_ALPHABET.to_vec(),
        default_grid_size: state.default_settings.grid_size(),
        default_num_words: state.default_settings.num_words(),
        max_grid_size: state.config.game.max_grid_size,
        max_num_words: state.config.game.max_words_per_game,
    })
}
