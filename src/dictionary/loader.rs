use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use thiserror::Error;

use super::{Dictionary, SharedDictionary};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to fetch word list: {0}")]
    Request(#[from] reqwest::Error),
    #[error("word list request returned status {0}")]
    Status(u16),
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list is empty")]
    EmptyBody,
    #[error("dictionary is already loaded")]
    AlreadyLoaded,
    #[error("dictionary load already in progress")]
    InProgress,
}

/// Somewhere a newline-delimited word list can be read from
#[async_trait]
pub trait WordListSource: Send + Sync {
    async fn fetch(&self) -> Result<String, DictionaryError>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}

/// Word list downloaded with a single GET request
pub struct RemoteWordList {
    url: String,
    client: reqwest::Client,
}

impl RemoteWordList {
    pub fn new(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl WordListSource for RemoteWordList {
    async fn fetch(&self) -> Result<String, DictionaryError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DictionaryError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(DictionaryError::EmptyBody);
        }

        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Word list read from a local file
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WordListSource for FileWordList {
    async fn fetch(&self) -> Result<String, DictionaryError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Err(DictionaryError::EmptyBody);
        }
        Ok(content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs single load attempts against a source and publishes the result.
///
/// There is no automatic retry; a failed attempt leaves the dictionary not loaded.
#[derive(Clone)]
pub struct DictionaryLoader {
    source: Arc<dyn WordListSource>,
    shared: SharedDictionary,
    in_flight: Arc<AtomicBool>,
}

impl DictionaryLoader {
    pub fn new(source: Arc<dyn WordListSource>, shared: SharedDictionary) -> Self {
        Self {
            source,
            shared,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn shared(&self) -> &SharedDictionary {
        &self.shared
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Fetch, parse and publish the word list once. Returns the number of words loaded.
    pub async fn load_once(&self) -> Result<usize, DictionaryError> {
        if self.shared.is_loaded() {
            return Err(DictionaryError::AlreadyLoaded);
        }
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(DictionaryError::InProgress);
        }
        // Cleared on drop so a cancelled attempt does not block later ones
        let _guard = InFlightGuard(&self.in_flight);

        tracing::info!("Loading dictionary from {}", self.source.describe());
        let result = self.fetch_and_publish().await;

        match &result {
            Ok(count) => tracing::info!("Loaded {} words into dictionary", count),
            Err(e) => tracing::warn!(
                "Failed to load dictionary from {}: {}",
                self.source.describe(),
                e
            ),
        }

        result
    }

    async fn fetch_and_publish(&self) -> Result<usize, DictionaryError> {
        let content = self.source.fetch().await?;
        // Parsing a large list is CPU-bound, keep it off the async workers
        let dictionary = tokio::task::spawn_blocking(move || Dictionary::parse(&content))
            .await
            .map_err(|e| DictionaryError::Io(std::io::Error::other(e)))?;

        if dictionary.is_empty() {
            return Err(DictionaryError::EmptyBody);
        }

        let count = dictionary.len();
        if !self.shared.publish(dictionary) {
            return Err(DictionaryError::AlreadyLoaded);
        }
        Ok(count)
    }
}
