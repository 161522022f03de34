use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{spawn_dictionary_load, AppState};

/// Start another load attempt when the dictionary is still not loaded
pub async fn reload_dictionary(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<Value>) {
    if state.dictionary.is_loaded() {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "status": "loaded" })),
        );
    }
    if state.loader.is_loading() {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "status": "loading" })),
        );
    }

    tracing::info!("Dictionary reload requested");
    spawn_dictionary_load(state.clone());
    (StatusCode::ACCEPTED, Json(json!({ "status": "loading" })))
}
