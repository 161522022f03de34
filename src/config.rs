use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, str::FromStr};

use crate::game::{gesture::DEFAULT_SHAKE_THRESHOLD, session::DEFAULT_EVENT_BUFFER};

/// Public word list fetched when no local file is configured
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words.txt";

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
    pub dictionary_url: String,
    /// Local word list that takes precedence over the remote one
    pub dictionary_path: Option<String>,
    pub shake_threshold: f64,
    pub event_buffer: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: number_or("PORT", env::var("PORT").ok(), 3000)?,
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "./static".to_string()),
        };

        let game = GameConfig {
            dictionary_url: env::var("DICTIONARY_URL")
                .unwrap_or_else(|_| DEFAULT_DICTIONARY_URL.to_string()),
            dictionary_path: env::var("DICTIONARY_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty()),
            shake_threshold: number_or(
                "SHAKE_THRESHOLD",
                env::var("SHAKE_THRESHOLD").ok(),
                DEFAULT_SHAKE_THRESHOLD,
            )?,
            event_buffer: number_or(
                "EVENT_BUFFER",
                env::var("EVENT_BUFFER").ok(),
                DEFAULT_EVENT_BUFFER,
            )?,
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Parse a numeric setting, using `default` when it is unset. A value that is set but
/// does not parse is an error rather than a silent fallback.
fn number_or<T>(name: &str, value: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number", name)),
        None => Ok(default),
    }
}
