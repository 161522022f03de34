mod config;
mod dictionary;
mod game;
mod models;
mod routes;
mod utils;
mod websocket;

use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use chrono::{DateTime, Utc};
use config::Config;
use dashmap::DashMap;
use dictionary::{
    DictionaryError, DictionaryLoader, FileWordList, RemoteWordList, SharedDictionary,
    WordListSource,
};
use game::{path::PathState, GameEvent, GameSession};
use tokio::{sync::broadcast, task::JoinHandle};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Capacity of the channel carrying server-wide notices to every connection
pub const NOTICE_BUFFER: usize = 16;

/// Bookkeeping for a connected game session
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub started_at: DateTime<Utc>,
    pub score: u32,
    pub words_found: usize,
    /// A word is being traced right now
    pub mid_word: bool,
}

impl SessionInfo {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            score: 0,
            words_found: 0,
            mid_word: false,
        }
    }

    /// Copy the latest figures from a session
    pub fn record(&mut self, session: &GameSession) {
        self.score = session.score();
        self.words_found = session.submitted_words().len();
        self.mid_word = session.path_state() == PathState::InProgress;
    }
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: SharedDictionary,
    pub loader: DictionaryLoader,
    /// Notices for every connected client, such as a failed dictionary load
    pub notices: broadcast::Sender<GameEvent>,
    pub active_sessions: DashMap<Uuid, SessionInfo>,
}

impl AppState {
    pub fn new(
        config: Config,
        source: Arc<dyn WordListSource>,
        dictionary: SharedDictionary,
    ) -> Self {
        let loader = DictionaryLoader::new(source, dictionary.clone());
        let (notices, _) = broadcast::channel(NOTICE_BUFFER);
        Self {
            config,
            dictionary,
            loader,
            notices,
            active_sessions: DashMap::new(),
        }
    }
}

/// Run one dictionary load attempt in the background.
///
/// A failed fetch is announced to connected clients once and the dictionary stays not loaded.
/// An attempt refused because another is running, or the list is already in, says nothing.
pub fn spawn_dictionary_load(state: Arc<AppState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match state.loader.load_once().await {
            Ok(_) => {}
            Err(e @ (DictionaryError::InProgress | DictionaryError::AlreadyLoaded)) => {
                tracing::debug!("Dictionary load skipped: {}", e);
            }
            Err(e) => {
                let _ = state.notices.send(GameEvent::DictionaryUnavailable {
                    reason: e.to_string(),
                });
            }
        }
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_grid_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word grid server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let source: Arc<dyn WordListSource> = match &config.game.dictionary_path {
        Some(path) => Arc::new(FileWordList::new(path)),
        None => {
            let http_client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?;
            Arc::new(RemoteWordList::new(
                config.game.dictionary_url.clone(),
                http_client,
            ))
        }
    };

    let state = Arc::new(AppState::new(
        config.clone(),
        source,
        SharedDictionary::new(),
    ));

    // The game is playable while the word list loads; submissions fail closed until then
    spawn_dictionary_load(state.clone());

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve client static files
    let frontend_service = ServeDir::new(&config.server.static_dir);

    // Build router
    let app = Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        // API routes
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
pub(crate) fn test_state(
    dictionary: SharedDictionary,
    source: Arc<dyn WordListSource>,
) -> Arc<AppState> {
    use config::{GameConfig, ServerConfig};

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: "./static".to_string(),
        },
        game: GameConfig {
            dictionary_url: config::DEFAULT_DICTIONARY_URL.to_string(),
            dictionary_path: None,
            shake_threshold: game::gesture::DEFAULT_SHAKE_THRESHOLD,
            event_buffer: game::session::DEFAULT_EVENT_BUFFER,
        },
    };
    Arc::new(AppState::new(config, source, dictionary))
}
