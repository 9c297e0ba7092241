//! Quality scoring for a round trip: lexical overlap metrics and the
//! weighted overall score with its level, description and recommendations.

use lexis_core::language::word_set;
use lexis_core::types::{OverallQuality, QualityLevel, QualityMetrics};

pub const FORWARD_CONFIDENCE_WEIGHT: f64 = 0.4;
pub const BACK_CONFIDENCE_WEIGHT: f64 = 0.3;
pub const SIMILARITY_WEIGHT: f64 = 0.3;

/// Per-level text, in band order. A score belongs to the first band whose
/// `min_score` it reaches.
pub struct LevelTemplate {
    pub level: QualityLevel,
    pub min_score: f64,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
    /// Emitted only when no advisory applies
    pub all_clear: Option<&'static str>,
}

pub static LEVEL_TEMPLATES: [LevelTemplate; 4] = [
    LevelTemplate {
        level: QualityLevel::Excellent,
        min_score: 80.0,
        description: "High-quality translation with good preservation of meaning",
        recommendations: &[],
        all_clear: Some("Translation quality is good - no immediate concerns"),
    },
    LevelTemplate {
        level: QualityLevel::Good,
        min_score: 60.0,
        description: "Acceptable translation with minor meaning loss",
        recommendations: &[
            "Translation is usable - spot-check words that did not survive the round trip",
        ],
        all_clear: None,
    },
    LevelTemplate {
        level: QualityLevel::Fair,
        min_score: 40.0,
        description: "Translation may have some meaning distortion",
        recommendations: &[
            "Review the translation before use - some meaning may be distorted",
            "Add missing words to the dictionary to improve coverage",
        ],
        all_clear: None,
    },
    LevelTemplate {
        level: QualityLevel::Poor,
        min_score: f64::NEG_INFINITY,
        description: "Translation quality is low, manual review recommended",
        recommendations: &[
            "Overall quality is below acceptable threshold - manual review recommended",
        ],
        all_clear: None,
    },
];

/// Metric-specific notes appended after the level recommendations
pub struct Advisory {
    pub metric: Metric,
    /// The note applies when the metric is strictly below this value
    pub below: f64,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    ForwardConfidence,
    BackConfidence,
    Similarity,
}

pub static ADVISORIES: [Advisory; 3] = [
    Advisory {
        metric: Metric::ForwardConfidence,
        below: 70.0,
        text: "Consider reviewing the forward translation - low dictionary coverage",
    },
    Advisory {
        metric: Metric::BackConfidence,
        below: 70.0,
        text: "Back translation has low confidence - may indicate translation issues",
    },
    Advisory {
        metric: Metric::Similarity,
        below: 50.0,
        text: "Low similarity between original and back-translated text - meaning may be lost",
    },
];

/// Round to 2 decimals, the precision every reported number uses
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn template_for(level: QualityLevel) -> &'static LevelTemplate {
    LEVEL_TEMPLATES
        .iter()
        .find(|t| t.level == level)
        .unwrap_or(&LEVEL_TEMPLATES[LEVEL_TEMPLATES.len() - 1])
}

/// Band a score; lower bounds are inclusive
pub fn level_for_score(score: f64) -> QualityLevel {
    LEVEL_TEMPLATES
        .iter()
        .find(|t| score >= t.min_score)
        .map(|t| t.level)
        .unwrap_or(QualityLevel::Poor)
}

/// Weighted score of the three inputs, clamped to [0, 100]. NaN counts as 0.
pub fn weighted_score(forward_confidence: f64, back_confidence: f64, similarity_score: f64) -> f64 {
    let score = forward_confidence * FORWARD_CONFIDENCE_WEIGHT
        + back_confidence * BACK_CONFIDENCE_WEIGHT
        + similarity_score * SIMILARITY_WEIGHT;

    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

/// Combine confidences and similarity into the overall quality.
///
/// The level is taken from the unrounded score so 79.999 stays `Good`.
pub fn aggregate(forward_confidence: f64, back_confidence: f64, similarity_score: f64) -> OverallQuality {
    let score = weighted_score(forward_confidence, back_confidence, similarity_score);
    let template = template_for(level_for_score(score));

    let advisories: Vec<&str> = ADVISORIES
        .iter()
        .filter(|advisory| {
            let value = match advisory.metric {
                Metric::ForwardConfidence => forward_confidence,
                Metric::BackConfidence => back_confidence,
                Metric::Similarity => similarity_score,
            };
            value < advisory.below
        })
        .map(|advisory| advisory.text)
        .collect();

    let all_clear = template.all_clear.filter(|_| advisories.is_empty());

    let recommendations = template
        .recommendations
        .iter()
        .copied()
        .chain(all_clear)
        .chain(advisories)
        .map(String::from)
        .collect();

    OverallQuality {
        overall_score: round2(score),
        quality_level: template.level,
        quality_description: template.description.to_string(),
        recommendations,
    }
}

/// Share of the original's distinct words that reappear in the back translation.
///
/// Both texts are reduced to sets of normalized words; an original with no
/// words scores 0.
pub fn quality_metrics(original: &str, back_translated: &str) -> QualityMetrics {
    let original_words = word_set(original);
    let back_words = word_set(back_translated);

    if original_words.is_empty() {
        return QualityMetrics::default();
    }

    let overlapping_words: Vec<String> = original_words
        .intersection(&back_words)
        .cloned()
        .collect();

    let ratio = overlapping_words.len() as f64 / original_words.len() as f64 * 100.0;
    let similarity_score = round2(ratio);

    QualityMetrics {
        similarity_score,
        word_overlap: overlapping_words.len(),
        total_original_words: original_words.len(),
        // same set ratio as similarity
        preservation_rate: similarity_score,
        overlapping_words,
    }
}
