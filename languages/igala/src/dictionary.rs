use std::collections::{HashMap, HashSet};

use lexis_core::dictionary::{BilingualDictionary, DictionaryEntry, DictionaryMetadata, LoadError};
use lexis_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lexis_core::types::{Direction, Language};
use serde::Deserialize;

// JSON structure of a dictionary file
#[derive(Debug, Deserialize)]
struct DictionaryJson {
    #[serde(default)]
    name: Option<String>,
    words: Vec<DictionaryEntry>,
}

/// English <-> Igala dictionary
///
/// The English index keeps the last entry for a repeated English word. The Igala
/// index is the inverse of the English index in source order, so when several
/// English words share one Igala word the last of them is what an Igala lookup
/// returns.
#[derive(Debug)]
pub struct IgalaDictionary {
    name: String,
    entries: Vec<DictionaryEntry>,
    english_index: HashMap<String, usize>,
    igala_index: HashMap<String, usize>,
}

impl IgalaDictionary {
    pub fn new() -> Self {
        Self::from_entries("empty", Vec::new())
    }

    /// Clean, deduplicate and index raw entries
    pub fn from_entries(name: impl Into<String>, raw: Vec<DictionaryEntry>) -> Self {
        let mut dict = Self {
            name: name.into(),
            entries: Vec::new(),
            english_index: HashMap::new(),
            igala_index: HashMap::new(),
        };
        dict.extend(raw);
        dict
    }

    /// Load from JSON string (`{"name": ..., "words": [{english, igala, pos}]}`)
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: DictionaryJson =
            serde_json::from_str(json_str).map_err(|e| LoadError::ParseError(e.to_string()))?;

        Ok(Self::from_entries(
            data.name.unwrap_or_else(|| "igala-eng".to_string()),
            data.words,
        ))
    }

    /// Load from TSV (`english\tigala[\tpos]` per line, `#` comments, optional header)
    pub fn from_tsv(name: impl Into<String>, content: &str) -> Result<Self, LoadError> {
        let mut raw = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 2 {
                tracing::warn!("Skipping malformed dictionary line {}: {:?}", line_no + 1, line);
                continue;
            }

            // header row
            if line_no == 0 && parts[0].trim().eq_ignore_ascii_case("english") {
                continue;
            }

            raw.push(DictionaryEntry {
                english: parts[0].to_string(),
                igala: parts[1].to_string(),
                pos: parts.get(2).map(|p| p.to_string()),
            });
        }

        if raw.is_empty() {
            return Err(LoadError::InvalidFormat("no dictionary entries found".to_string()));
        }

        Ok(Self::from_entries(name, raw))
    }

    /// Get the number of entries in the dictionary
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Merge another dictionary into this one.
    /// Entries from `other` come later and so win on conflicting English words.
    pub fn merge(mut self, other: IgalaDictionary) -> Self {
        self.extend(other.entries);
        self
    }

    fn extend(&mut self, raw: Vec<DictionaryEntry>) {
        let preprocessor = DefaultPreprocessor;
        let mut seen: HashSet<(String, String)> = self
            .entries
            .iter()
            .map(|e| (english_key(e), igala_key(e)))
            .collect();

        for entry in raw {
            let english = preprocessor.process(&entry.english).to_lowercase();
            let igala = preprocessor.process(&entry.igala);
            if english.is_empty() || igala.is_empty() {
                continue;
            }

            let pos = entry
                .pos
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty());

            let cleaned = DictionaryEntry { english, igala, pos };
            if seen.insert((english_key(&cleaned), igala_key(&cleaned))) {
                self.entries.push(cleaned);
            }
        }

        self.rebuild_indices();
    }

    fn rebuild_indices(&mut self) {
        self.english_index.clear();
        self.igala_index.clear();

        for (idx, entry) in self.entries.iter().enumerate() {
            self.english_index.insert(english_key(entry), idx);
        }

        for (idx, entry) in self.entries.iter().enumerate() {
            // only entries that survived in the English index take part in the inverse
            if self.english_index.get(&english_key(entry)) == Some(&idx) {
                self.igala_index.insert(igala_key(entry), idx);
            }
        }
    }
}

impl Default for IgalaDictionary {
    fn default() -> Self {
        Self::new()
    }
}

fn english_key(entry: &DictionaryEntry) -> String {
    DefaultPreprocessor.normalize_word(&entry.english)
}

fn igala_key(entry: &DictionaryEntry) -> String {
    DefaultPreprocessor.normalize_word(&entry.igala)
}

impl BilingualDictionary for IgalaDictionary {
    fn lookup_exact(&self, key: &str, direction: Direction) -> Option<&str> {
        match direction {
            Direction::EnToIg => self
                .english_index
                .get(key)
                .and_then(|&idx| self.entries.get(idx))
                .map(|e| e.igala.as_str()),
            Direction::IgToEn => self
                .igala_index
                .get(key)
                .and_then(|&idx| self.entries.get(idx))
                .map(|e| e.english.as_str()),
        }
    }

    fn headwords(&self, language: Language) -> Vec<&str> {
        let index = match language {
            Language::English => &self.english_index,
            Language::Igala => &self.igala_index,
        };
        index.keys().map(String::as_str).collect()
    }

    fn part_of_speech(&self, english: &str) -> Option<&str> {
        self.english_index
            .get(english)
            .and_then(|&idx| self.entries.get(idx))
            .and_then(|e| e.pos.as_deref())
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            version: "1.0".to_string(),
            languages: ("en".to_string(), "igl".to_string()),
            entry_count: self.entries.len(),
        }
    }
}
