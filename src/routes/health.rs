use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "word-grid-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "dictionary_loaded": state.dictionary.is_loaded(),
        "dictionary_words": state.dictionary.get().map_or(0, |dict| dict.len()),
        "active_sessions": state.active_sessions.len(),
        "sessions_mid_word": state
            .active_sessions
            .iter()
            .filter(|entry| entry.mid_word)
            .count(),
    }))
}
