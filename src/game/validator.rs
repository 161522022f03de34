use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{dictionary::Dictionary, utils::letters::count_vowels};

/// Text a client shows in the input box before any letter is picked
pub const PLACEHOLDER_PROMPT: &str = "User Input";
/// Shortest word that can be submitted
pub const MIN_WORD_LENGTH: usize = 4;
/// Fewest vowels an accepted word may contain
pub const MIN_VOWELS: usize = 2;

/// Result of checking a submitted word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "word", rename_all = "snake_case")]
pub enum Outcome {
    Empty,
    TooShort,
    NotInDictionary,
    TooFewVowels,
    Duplicate,
    Accepted(String),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

/// Words already accepted this session, compared ignoring case
#[derive(Debug, Clone, Default)]
pub struct SubmittedWords {
    words: HashSet<String>,
}

impl SubmittedWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Record a word. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }
}

pub struct WordValidator;

impl WordValidator {
    /// Run the acceptance checks in order, reporting the first that fails.
    ///
    /// A `None` dictionary has not loaded yet, so membership never passes.
    pub fn validate(
        raw_input: &str,
        dictionary: Option<&Dictionary>,
        submitted: &SubmittedWords,
    ) -> Outcome {
        if raw_input.is_empty() || raw_input == PLACEHOLDER_PROMPT {
            return Outcome::Empty;
        }

        if raw_input.chars().count() < MIN_WORD_LENGTH {
            return Outcome::TooShort;
        }

        if !dictionary.is_some_and(|dict| dict.contains(raw_input)) {
            return Outcome::NotInDictionary;
        }

        if count_vowels(raw_input) < MIN_VOWELS {
            return Outcome::TooFewVowels;
        }

        if submitted.contains(raw_input) {
            return Outcome::Duplicate;
        }

        Outcome::Accepted(raw_input.to_string())
    }
}
