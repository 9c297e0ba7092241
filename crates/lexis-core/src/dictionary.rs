use lexis_types::{Direction, Language};
use serde::Deserialize;

use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Bilingual word lookup operations
pub trait BilingualDictionary: Send + Sync {
    /// Exact match on an already-normalized key
    fn lookup_exact(&self, key: &str, direction: Direction) -> Option<&str>;

    /// All headwords on one side of the dictionary, unordered
    fn headwords(&self, language: Language) -> Vec<&str>;

    /// Part-of-speech tag recorded for an English headword
    fn part_of_speech(&self, english: &str) -> Option<&str>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;

    /// Normalize `word` and look it up. `None` means the word is not in the dictionary.
    fn lookup(&self, word: &str, direction: Direction) -> Option<&str> {
        let key = DefaultPreprocessor.normalize_word(word);
        if key.is_empty() {
            return None;
        }
        self.lookup_exact(&key, direction)
    }

    fn contains(&self, word: &str, direction: Direction) -> bool {
        self.lookup(word, direction).is_some()
    }
}

/// One row of source data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictionaryEntry {
    #[serde(alias = "English")]
    pub english: String,
    #[serde(alias = "Igala")]
    pub igala: String,
    #[serde(default, alias = "POS")]
    pub pos: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub languages: (String, String),
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
