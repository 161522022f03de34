use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    game::GameEvent,
    models::{Board, CellIndex},
};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    SelectCell {
        index: CellIndex,
    },
    SubmitWord,
    ClearSelection,
    NewGame,
    /// One accelerometer sample; a shake starts a new game
    Motion {
        timestamp_ms: u64,
        x: f64,
        y: f64,
        z: f64,
    },
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    SessionStarted {
        session_id: Uuid,
        board: Board,
        score: u32,
        dictionary_loaded: bool,
    },
    Event {
        event: GameEvent,
    },
    Error {
        message: String,
    },
}
