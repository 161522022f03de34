pub mod loader;

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::OnceCell;

pub use loader::{DictionaryError, DictionaryLoader, FileWordList, RemoteWordList, WordListSource};

#[derive(Debug, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Parse a newline-delimited word list. Lookups ignore case.
    pub fn parse(content: &str) -> Self {
        let words: HashSet<String> = content
            .trim()
            .lines()
            .map(|line| line.trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Shared, read-only handle to a dictionary that may not be loaded yet.
///
/// The word list is published at most once; every clone sees it as soon as it lands.
#[derive(Debug, Clone, Default)]
pub struct SharedDictionary {
    cell: Arc<OnceCell<Dictionary>>,
}

impl SharedDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that is already loaded
    pub fn loaded(dictionary: Dictionary) -> Self {
        let shared = Self::new();
        shared.publish(dictionary);
        shared
    }

    /// The dictionary, or `None` while it is still not loaded
    pub fn get(&self) -> Option<&Dictionary> {
        self.cell.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Publish the dictionary. Returns false when one was already published.
    pub fn publish(&self, dictionary: Dictionary) -> bool {
        self.cell.set(dictionary).is_ok()
    }
}
