use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Translation direction between the two dictionary languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// English -> Igala
    #[default]
    #[serde(rename = "en_to_ig")]
    EnToIg,
    /// Igala -> English
    #[serde(rename = "ig_to_en")]
    IgToEn,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Direction::EnToIg => Direction::IgToEn,
            Direction::IgToEn => Direction::EnToIg,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::EnToIg => "en_to_ig",
            Direction::IgToEn => "ig_to_en",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown translation direction: {0:?} (expected \"en_to_ig\" or \"ig_to_en\")")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en_to_ig" => Ok(Direction::EnToIg),
            "ig_to_en" => Ok(Direction::IgToEn),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

/// One side of a single translation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
    /// Share of tokens found in the dictionary, 0-100
    pub confidence: f64,
    pub direction: Direction,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchTranslation {
    pub results: Vec<TranslationResult>,
    pub average_confidence: f64,
}

/// Lexical overlap between the original text and its back translation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub similarity_score: f64,
    pub word_overlap: usize,
    pub total_original_words: usize,
    pub preservation_rate: f64,
    pub overlapping_words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 4] = [
        QualityLevel::Excellent,
        QualityLevel::Good,
        QualityLevel::Fair,
        QualityLevel::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "Excellent",
            QualityLevel::Good => "Good",
            QualityLevel::Fair => "Fair",
            QualityLevel::Poor => "Poor",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted score with its band and advice.
///
/// `quality_level` is decided on the unrounded score, while `overall_score` is
/// reported rounded to 2 decimals. A score of 79.9999 is therefore reported as
/// `80.0` with level `Good`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallQuality {
    pub overall_score: f64,
    pub quality_level: QualityLevel,
    pub quality_description: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackTranslationResult {
    pub original_text: String,
    pub forward_translation: String,
    pub back_translation: String,
    pub forward_confidence: f64,
    pub back_confidence: f64,
    pub quality_metrics: QualityMetrics,
    pub overall_quality: OverallQuality,
    pub source_direction: Direction,
    pub timestamp: DateTime<Utc>,
}

/// Quality check of a translation supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    pub original_text: String,
    pub provided_translation: String,
    pub back_translation: String,
    pub forward_confidence: f64,
    pub back_confidence: f64,
    pub quality_metrics: QualityMetrics,
    pub overall_quality: OverallQuality,
    pub direction: Direction,
    pub timestamp: DateTime<Utc>,
}

/// Count of results per quality level. Every level is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QualityDistribution {
    #[serde(rename = "Excellent")]
    pub excellent: usize,
    #[serde(rename = "Good")]
    pub good: usize,
    #[serde(rename = "Fair")]
    pub fair: usize,
    #[serde(rename = "Poor")]
    pub poor: usize,
}

impl QualityDistribution {
    pub fn record(&mut self, level: QualityLevel) {
        match level {
            QualityLevel::Excellent => self.excellent += 1,
            QualityLevel::Good => self.good += 1,
            QualityLevel::Fair => self.fair += 1,
            QualityLevel::Poor => self.poor += 1,
        }
    }

    pub fn count(&self, level: QualityLevel) -> usize {
        match level {
            QualityLevel::Excellent => self.excellent,
            QualityLevel::Good => self.good,
            QualityLevel::Fair => self.fair,
            QualityLevel::Poor => self.poor,
        }
    }

    pub fn total(&self) -> usize {
        self.excellent + self.good + self.fair + self.poor
    }
}

impl FromIterator<QualityLevel> for QualityDistribution {
    fn from_iter<I: IntoIterator<Item = QualityLevel>>(iter: I) -> Self {
        let mut distribution = QualityDistribution::default();
        for level in iter {
            distribution.record(level);
        }
        distribution
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_texts: usize,
    pub average_quality_score: f64,
    pub quality_distribution: QualityDistribution,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchBackTranslation {
    pub results: Vec<BackTranslationResult>,
    pub summary: BatchSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedLanguage {
    English,
    Igala,
    Unknown,
}

/// Dictionary side used for lookups that are not tied to a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Igala,
}

impl Language {
    /// Direction whose source side is this language
    pub fn as_source(self) -> Direction {
        match self {
            Language::English => Direction::EnToIg,
            Language::Igala => Direction::IgToEn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}
