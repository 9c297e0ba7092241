//! Request and response bodies for the HTTP API.
//!
//! Required fields are `Option` so a missing field is reported as a 400 with
//! a readable message rather than a deserialization failure.

use lexis_core::error::LexisError;
use lexis_core::types::{DetectedLanguage, Direction, Language, TaggedWord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dictionary_entries: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(alias = "english-text")]
    pub text: Option<String>,
    pub direction: Option<String>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchTranslateRequest {
    pub texts: Option<Vec<String>>,
    pub direction: Option<String>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BackTranslateRequest {
    pub text: Option<String>,
    pub source_direction: Option<String>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchBackTranslateRequest {
    pub texts: Option<Vec<String>>,
    pub source_direction: Option<String>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QualityRequest {
    pub original_text: Option<String>,
    pub translated_text: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetectLanguageRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetectLanguageResponse {
    pub text: String,
    pub detected_language: DetectedLanguage,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    pub partial_word: Option<String>,
    pub language: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub partial_word: String,
    pub language: Language,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PosTagRequest {
    #[serde(alias = "text")]
    pub translation_text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PosTagResponse {
    pub original_text: String,
    /// Tags joined with ", "
    pub pos_tags: String,
    pub tagged_words: Vec<TaggedWord>,
}

/// A required, non-blank text field
pub fn require_text(value: Option<String>, field: &str) -> Result<String, LexisError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(LexisError::invalid_input(format!("{field} is required"))),
    }
}

/// A required, non-empty list field. Blank entries are allowed and score as empty input.
pub fn require_texts(value: Option<Vec<String>>, field: &str) -> Result<Vec<String>, LexisError> {
    match value {
        Some(texts) if !texts.is_empty() => Ok(texts),
        _ => Err(LexisError::invalid_input(format!(
            "{field} must be a non-empty list"
        ))),
    }
}

/// Parse an optional direction, defaulting to English -> Igala
pub fn parse_direction(value: Option<&str>) -> Result<Direction, LexisError> {
    match value {
        None => Ok(Direction::default()),
        Some(s) => Ok(s.parse()?),
    }
}

pub fn parse_language(value: Option<&str>) -> Result<Language, LexisError> {
    match value.map(|s| s.trim().to_lowercase()).as_deref() {
        None | Some("english") | Some("en") => Ok(Language::English),
        Some("igala") | Some("ig") => Ok(Language::Igala),
        Some(_) => Err(LexisError::UnknownLanguage(value.unwrap_or_default().to_string())),
    }
}
