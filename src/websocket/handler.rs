use crate::{
    effects::ChannelEffects,
    game::{GameError, GameSession, SelectionOutcome},
    websocket::messages::{ClientMessage, ServerMessage},
    AppState,
};
use anyhow::Context;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection. Each connection plays its own game.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    let session_id = Uuid::new_v4();
    let effects = Arc::new(ChannelEffects::new(tx.clone()));
    let session = GameSession::new(&state.dictionary, state.default_settings, effects.clone());
    let initial_state = puzzle_state(session_id, &session);
    state.sessions.insert(session_id, session);

    tracing::info!("WebSocket connection established for session {}", session_id);

    if tx.send(initial_state).await.is_err() {
        state.sessions.remove(&session_id);
        return;
    }

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages from the client
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => {
                        if let Err(e) =
                            handle_client_message(client_msg, &state_for_recv, session_id, &tx, &effects)
                                .await
                        {
                            tracing::error!("Error handling message: {}", e);
                            let error_msg = ServerMessage::Error {
                                message: e.to_string(),
                            };
                            let _ = tx.send(error_msg).await;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse message: {}", e);
                        let error_msg = ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        };
                        let _ = tx.send(error_msg).await;
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Client disconnected: session {}", session_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    state.sessions.remove(&session_id);

    tracing::info!("WebSocket connection closed for session {}", session_id);
}

/// Full snapshot of a session's puzzle
pub fn puzzle_state(session_id: Uuid, session: &GameSession) -> ServerMessage {
    let puzzle = session.puzzle();
    ServerMessage::PuzzleState {
        session_id,
        grid: puzzle.grid.clone(),
        words: puzzle.words.clone(),
        remaining: puzzle.remaining(),
    }
}

/// Handle individual client messages
async fn handle_client_message(
    msg: ClientMessage,
    state: &AppState,
    session_id: Uuid,
    tx: &mpsc::Sender<ServerMessage>,
    effects: &ChannelEffects,
) -> anyhow::Result<()> {
    // The session guard must be released before awaiting on the channel.
    let replies = {
        let mut session = state
            .sessions
            .get_mut(&session_id)
            .context("Game session not found")?;
        apply_message(msg, state, session_id, &mut session)?
    };

    for reply in replies {
        tx.send(reply).await?;
    }
    effects.flush();

    Ok(())
}

/// Run a client message against the session and collect the replies.
pub fn apply_message(
    msg: ClientMessage,
    state: &AppState,
    session_id: Uuid,
    session: &mut GameSession,
) -> Result<Vec<ServerMessage>, GameError> {
    let replies = match msg {
        ClientMessage::NewGame {
            num_words,
            grid_size,
        } => {
            let settings = state.default_settings.with_overrides(
                num_words,
                grid_size,
                state.config.limits(),
            )?;
            tracing::info!(
                "Session {} starting new {}x{} game with {} words",
                session_id,
                settings.grid_size(),
                settings.grid_size(),
                settings.num_words()
            );
            session.new_game(&state.dictionary, settings);
            vec![puzzle_state(session_id, session)]
        }
        ClientMessage::BeginSelection { position } => {
            session.begin_selection(position);
            vec![ServerMessage::Selection {
                path: session.selection_path().to_vec(),
            }]
        }
        ClientMessage::UpdateSelection { position } => {
            if session.update_selection(position) {
                vec![ServerMessage::Selection {
                    path: session.selection_path().to_vec(),
                }]
            } else {
                Vec::new()
            }
        }
        ClientMessage::EndSelection => {
            let cleared = ServerMessage::Selection { path: Vec::new() };
            match session.end_selection() {
                SelectionOutcome::Inactive => Vec::new(),
                SelectionOutcome::NoMatch { candidate } => {
                    tracing::debug!("Session {} selected {}: no match", session_id, candidate);
                    vec![ServerMessage::NoMatch { candidate }, cleared]
                }
                SelectionOutcome::WordFound {
                    index,
                    word,
                    complete,
                } => {
                    let mut replies = vec![
                        ServerMessage::WordFound { index, word },
                        puzzle_state(session_id, session),
                        cleared,
                    ];
                    if complete {
                        replies.push(ServerMessage::PuzzleComplete {
                            elapsed_ms: session.elapsed().num_milliseconds(),
                        });
                    }
                    replies
                }
            }
        }
        ClientMessage::WakeLock { state: lock_state } => {
            session.report_wake_lock(lock_state);
            Vec::new()
        }
    };

    Ok(replies)
}
