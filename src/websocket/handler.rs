use crate::{
    game::{GameEvent, GameSession, GridGenerator, ShakeDetector},
    websocket::messages::{ClientMessage, ServerMessage},
    AppState, SessionInfo,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use chrono::Utc;
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection. Each connection plays its own session.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    let mut session = GameSession::with_buffer(
        GridGenerator::generate(),
        state.dictionary.clone(),
        state.config.game.event_buffer,
    );
    let session_id = session.id();
    state.active_sessions.insert(session_id, SessionInfo::new());
    tracing::info!("WebSocket connection established for session {}", session_id);

    let _ = tx
        .send(ServerMessage::SessionStarted {
            session_id,
            board: session.board().clone(),
            score: session.score(),
            dictionary_loaded: session.dictionary_loaded(),
        })
        .await;

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

    let session_events = tokio::spawn(forward_events(session.subscribe(), tx.clone()));
    let notices = tokio::spawn(forward_events(state.notices.subscribe(), tx.clone()));

    // Handle incoming messages from the client
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        let mut detector = ShakeDetector::new(state_for_recv.config.game.shake_threshold);

        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => {
                        handle_client_message(client_msg, &mut session, &mut detector);
                        if let Some(mut info) = state_for_recv.active_sessions.get_mut(&session_id)
                        {
                            info.record(&session);
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
                    tracing::info!("Client disconnected from session {}", session_id);
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
    session_events.abort();
    notices.abort();

    if let Some((_, info)) = state.active_sessions.remove(&session_id) {
        tracing::info!(
            "WebSocket connection closed for session {} after {}s with score {} ({} words)",
            session_id,
            (Utc::now() - info.started_at).num_seconds(),
            info.score,
            info.words_found
        );
    }
}

/// Relay broadcast game events onto a connection's outgoing queue
async fn forward_events(
    mut events: broadcast::Receiver<GameEvent>,
    tx: mpsc::Sender<ServerMessage>,
) {
    loop {
        match events.recv().await {
            Ok(event) => {
                if tx.send(ServerMessage::Event { event }).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("Client lagging, dropped {} game events", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Apply one client action to the session. Outcomes reach the client as events.
fn handle_client_message(
    msg: ClientMessage,
    session: &mut GameSession,
    detector: &mut ShakeDetector,
) {
    match msg {
        ClientMessage::SelectCell { index } => {
            // A rejected move is reported through the InvalidMove event
            let _ = session.select_cell(index);
        }
        ClientMessage::SubmitWord => {
            session.submit_word();
        }
        ClientMessage::ClearSelection => session.clear_selection(),
        ClientMessage::NewGame => session.new_game(),
        ClientMessage::Motion {
            timestamp_ms,
            x,
            y,
            z,
        } => {
            if detector.on_sample(timestamp_ms, x, y, z) {
                tracing::info!("Shake detected in session {}", session.id());
                session.new_game();
            }
        }
    }
}
