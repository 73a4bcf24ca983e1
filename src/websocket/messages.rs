use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    effects::{EffectKind, Tone, WakeLockState},
    models::{Grid, Position, Word},
};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    NewGame {
        #[serde(default)]
        num_words: Option<usize>,
        #[serde(default)]
        grid_size: Option<usize>,
    },
    BeginSelection {
        position: Position,
    },
    UpdateSelection {
        position: Position,
    },
    EndSelection,
    WakeLock {
        state: WakeLockState,
    },
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    PuzzleState {
        session_id: Uuid,
        grid: Grid,
        words: Vec<Word>,
        remaining: usize,
    },
    Selection {
        path: Vec<Position>,
    },
    WordFound {
        index: usize,
        word: Word,
    },
    NoMatch {
        candidate: String,
    },
    PuzzleComplete {
        elapsed_ms: i64,
    },
    PlayEffect {
        kind: EffectKind,
        gain: f32,
        tones: Vec<Tone>,
    },
    Error {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_messages() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"begin_selection","position":{"x":1,"y":2}}"#).unwrap();
        assert!(matches!(
            msg,
            ClientMessage::BeginSelection { position } if position == Position::new(1, 2)
        ));

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"new_game"}"#).unwrap();
        assert!(matches!(
            msg,
            ClientMessage::NewGame {
                num_words: None,
                grid_size: None
            }
        ));

        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"wake_lock","state":"held"}"#).unwrap();
        assert!(matches!(
            msg,
            ClientMessage::WakeLock {
                state: WakeLockState::Held
            }
        ));
    }

    #[test]
    fn test_negative_position_is_rejected() {
        let result = serde_json::from_str::<ClientMessage>(
            r#"{"type":"update_selection","position":{"x":-1,"y":0}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_server_message_tag() {
        let json = serde_json::to_value(ServerMessage::PuzzleComplete { elapsed_ms: 1500 }).unwrap();
        assert_eq!(json["type"], "puzzle_complete");
        assert_eq!(json["elapsed_ms"], 1500);
    }
}
