use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::{PuzzleSettings, SettingsLimits};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: Option<String>,
    pub grid_size: usize,
    pub words_per_game: usize,
    pub max_grid_size: usize,
    pub max_words_per_game: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "./frontend".to_string()),
        };

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH").ok(),
            grid_size: env::var("GRID_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("GRID_SIZE must be a number")?,
            words_per_game: env::var("WORDS_PER_GAME")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .context("WORDS_PER_GAME must be a number")?,
            max_grid_size: env::var("MAX_GRID_SIZE")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("MAX_GRID_SIZE must be a number")?,
            max_words_per_game: env::var("MAX_WORDS_PER_GAME")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .context("MAX_WORDS_PER_GAME must be a number")?,
        };

        let config = Config { server, game };
        config
            .default_settings()
            .context("GRID_SIZE and WORDS_PER_GAME must be positive and within MAX_GRID_SIZE and MAX_WORDS_PER_GAME")?;

        Ok(config)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Largest puzzle a client may request.
    pub fn limits(&self) -> SettingsLimits {
        SettingsLimits {
            max_grid_size: self.game.max_grid_size,
            max_words: self.game.max_words_per_game,
        }
    }

    /// Puzzle settings used when a client does not ask for specific ones.
    pub fn default_settings(&self) -> Result<PuzzleSettings> {
        Ok(PuzzleSettings::bounded(
            self.game.words_per_game,
            self.game.grid_size,
            self.limits(),
        )?)
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                static_dir: "./frontend".to_string(),
            },
            game: GameConfig {
                dictionary_path: None,
                grid_size: 10,
                words_per_game: 8,
                max_grid_size: 30,
                max_words_per_game: 50,
            },
        }
    }
}
