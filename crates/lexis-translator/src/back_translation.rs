//! Back-translation quality pipeline.
//!
//! Text is translated forward, the result translated back into the source
//! language, and the round trip scored on how many of the original words
//! come back.

use chrono::Utc;
use lexis_core::types::{
    BackTranslationResult, BatchBackTranslation, BatchSummary, Direction, OverallQuality,
    QualityAssessment, QualityDistribution,
};

use crate::Translator;
use crate::quality::{aggregate, quality_metrics, round2};

pub struct BackTranslator<T> {
    translator: T,
}

impl<T: Translator> BackTranslator<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Translate `text` forward and back, then score the round trip
    pub fn back_translate(&self, text: &str, source_direction: Direction) -> BackTranslationResult {
        let forward = self.translator.translate(text, source_direction);
        let back = self
            .translator
            .translate(&forward.translated, source_direction.reverse());

        let quality_metrics = quality_metrics(text, &back.translated);
        let overall_quality = aggregate(
            forward.confidence,
            back.confidence,
            quality_metrics.similarity_score,
        );

        tracing::debug!(
            %source_direction,
            forward_confidence = forward.confidence,
            back_confidence = back.confidence,
            similarity = quality_metrics.similarity_score,
            score = overall_quality.overall_score,
            level = %overall_quality.quality_level,
            "back translation scored"
        );

        BackTranslationResult {
            original_text: text.to_string(),
            forward_translation: forward.translated,
            back_translation: back.translated,
            forward_confidence: forward.confidence,
            back_confidence: back.confidence,
            quality_metrics,
            overall_quality,
            source_direction,
            timestamp: Utc::now(),
        }
    }

    /// Score a translation the caller already has.
    ///
    /// The forward confidence is the translator's coverage of `original_text`
    /// in `direction`; only the back leg is translated.
    pub fn assess_existing_translation(
        &self,
        original_text: &str,
        translated_text: &str,
        direction: Direction,
    ) -> QualityAssessment {
        let forward_confidence = self.translator.coverage(original_text, direction);
        let back = self.translator.translate(translated_text, direction.reverse());

        let quality_metrics = quality_metrics(original_text, &back.translated);
        let overall_quality = aggregate(
            forward_confidence,
            back.confidence,
            quality_metrics.similarity_score,
        );

        QualityAssessment {
            original_text: original_text.to_string(),
            provided_translation: translated_text.to_string(),
            back_translation: back.translated,
            forward_confidence,
            back_confidence: back.confidence,
            quality_metrics,
            overall_quality,
            direction,
            timestamp: Utc::now(),
        }
    }

    /// Back-translate each text in order and summarize the batch
    pub fn batch_back_translate<S: AsRef<str>>(
        &self,
        texts: &[S],
        source_direction: Direction,
    ) -> BatchBackTranslation {
        let results: Vec<BackTranslationResult> = texts
            .iter()
            .map(|text| self.back_translate(text.as_ref(), source_direction))
            .collect();

        let summary = summarize(results.iter().map(|r| &r.overall_quality));

        BatchBackTranslation { results, summary }
    }
}

/// Count, average score and per-level distribution of scored results.
///
/// The distribution counts each result's recorded level. The average is 0 for
/// an empty batch.
pub fn summarize<'a, I>(qualities: I) -> BatchSummary
where
    I: IntoIterator<Item = &'a OverallQuality>,
{
    let mut total_texts = 0;
    let mut total_score = 0.0;
    let mut quality_distribution = QualityDistribution::default();

    for quality in qualities {
        total_texts += 1;
        total_score += quality.overall_score;
        quality_distribution.record(quality.quality_level);
    }

    let average_quality_score = if total_texts == 0 {
        0.0
    } else {
        round2(total_score / total_texts as f64)
    };

    BatchSummary {
        total_texts,
        average_quality_score,
        quality_distribution,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use lexis_core::types::{DetectedLanguage, QualityLevel, TranslationResult};
    use lexis_lang_igala::IgalaProcessor;

    use super::*;
    use crate::DictionaryTranslator;

    fn pipeline() -> BackTranslator<DictionaryTranslator> {
        BackTranslator::new(DictionaryTranslator::new(IgalaProcessor::new().dictionary()))
    }

    #[test]
    fn test_hello_world_scenario() {
        let result = pipeline().back_translate("Hello world", Direction::EnToIg);

        assert_eq!(result.forward_translation, "náàgò àná");
        assert_eq!(result.back_translation, "sympathy world");
        assert_eq!(result.forward_confidence, 100.0);
        assert_eq!(result.back_confidence, 100.0);
        assert_eq!(result.quality_metrics.overlapping_words, ["world"]);
        assert_eq!(result.quality_metrics.word_overlap, 1);
        assert_eq!(result.quality_metrics.total_original_words, 2);
        assert_eq!(result.quality_metrics.similarity_score, 50.0);
        assert_eq!(result.overall_quality.overall_score, 85.0);
        assert_eq!(result.overall_quality.quality_level, QualityLevel::Excellent);
        assert_eq!(result.source_direction, Direction::EnToIg);
    }

    #[test]
    fn test_exact_round_trip_is_excellent() {
        let result = pipeline().back_translate("Eat white stone.", Direction::EnToIg);

        assert_eq!(result.back_translation, "eat white stone");
        assert_eq!(result.quality_metrics.similarity_score, 100.0);
        assert_eq!(result.overall_quality.overall_score, 100.0);
        assert_eq!(result.overall_quality.quality_level, QualityLevel::Excellent);
    }

    #[test]
    fn test_reverse_source_direction() {
        let result = pipeline().back_translate("jẹ ítébùlù", Direction::IgToEn);

        assert_eq!(result.forward_translation, "eat table");
        assert_eq!(result.back_translation, "jẹ ítébùlù");
        assert_eq!(result.quality_metrics.similarity_score, 100.0);
    }

    #[test]
    fn test_unknown_words_echo_back() {
        // nothing translates, so the echoed words overlap fully but confidence is 0
        let result = pipeline().back_translate("the dog", Direction::EnToIg);

        assert_eq!(result.forward_confidence, 0.0);
        assert_eq!(result.back_confidence, 0.0);
        assert_eq!(result.quality_metrics.similarity_score, 100.0);
        assert_eq!(result.overall_quality.overall_score, 30.0);
        assert_eq!(result.overall_quality.quality_level, QualityLevel::Poor);
    }

    #[test]
    fn test_empty_input_is_degenerate_not_error() {
        let result = pipeline().back_translate("", Direction::EnToIg);

        assert_eq!(result.forward_translation, "");
        assert_eq!(result.back_translation, "");
        assert_eq!(result.forward_confidence, 0.0);
        assert_eq!(result.back_confidence, 0.0);
        assert_eq!(result.quality_metrics.total_original_words, 0);
        assert_eq!(result.quality_metrics.similarity_score, 0.0);
        assert_eq!(result.quality_metrics.preservation_rate, 0.0);
        assert_eq!(result.overall_quality.overall_score, 0.0);
        assert_eq!(result.overall_quality.quality_level, QualityLevel::Poor);
    }

    #[test]
    fn test_overlap_never_exceeds_total() {
        let p = pipeline();
        let texts = [
            "Hello world",
            "hello hello hello",
            "red red house the",
            "náàgò sympathy hello",
            "?!",
            "water child pour take read write",
        ];
        for text in texts {
            for direction in [Direction::EnToIg, Direction::IgToEn] {
                let result = p.back_translate(text, direction);
                let m = &result.quality_metrics;
                assert!(m.word_overlap <= m.total_original_words, "{text}");
                assert!((0.0..=100.0).contains(&result.overall_quality.overall_score));
            }
        }
    }

    #[test]
    fn test_assess_existing_translation() {
        let assessment =
            pipeline().assess_existing_translation("Hello world", "náàgò àná", Direction::EnToIg);

        assert_eq!(assessment.provided_translation, "náàgò àná");
        assert_eq!(assessment.back_translation, "sympathy world");
        assert_eq!(assessment.forward_confidence, 100.0);
        assert_eq!(assessment.quality_metrics.similarity_score, 50.0);
        assert_eq!(assessment.overall_quality.overall_score, 85.0);
    }

    #[test]
    fn test_assess_poor_supplied_translation() {
        let assessment =
            pipeline().assess_existing_translation("red house", "something else", Direction::EnToIg);

        assert_eq!(assessment.forward_confidence, 100.0);
        assert_eq!(assessment.back_confidence, 0.0);
        assert_eq!(assessment.quality_metrics.word_overlap, 0);
        assert_eq!(assessment.overall_quality.overall_score, 40.0);
        assert_eq!(assessment.overall_quality.quality_level, QualityLevel::Fair);
    }

    #[test]
    fn test_batch_back_translate() {
        let batch = pipeline().batch_back_translate(
            &["Hello", "Good morning", "Thank you"],
            Direction::EnToIg,
        );

        assert_eq!(batch.results.len(), 3);
        assert_eq!(batch.results[0].original_text, "Hello");
        assert_eq!(batch.summary.total_texts, 3);
        assert_eq!(batch.summary.quality_distribution.total(), 3);
    }

    fn quality_with_score(score: f64) -> OverallQuality {
        let quality = aggregate(score, score, score);
        assert_eq!(quality.overall_score, score);
        quality
    }

    #[test]
    fn test_summary_average_and_distribution() {
        let qualities: Vec<OverallQuality> =
            [100.0, 85.0, 45.0].into_iter().map(quality_with_score).collect();
        let summary = summarize(&qualities);

        assert_eq!(summary.total_texts, 3);
        assert_eq!(summary.average_quality_score, 76.67);
        // 85 is in the Excellent band
        assert_eq!(summary.quality_distribution.excellent, 2);
        assert_eq!(summary.quality_distribution.good, 0);
        assert_eq!(summary.quality_distribution.fair, 1);
        assert_eq!(summary.quality_distribution.poor, 0);
    }

    #[test]
    fn test_summary_one_per_band() {
        let qualities: Vec<OverallQuality> =
            [100.0, 75.0, 55.0].into_iter().map(quality_with_score).collect();
        let summary = summarize(&qualities);

        assert_eq!(summary.average_quality_score, 76.67);
        for (level, expected) in [
            (QualityLevel::Excellent, 1),
            (QualityLevel::Good, 1),
            (QualityLevel::Fair, 1),
            (QualityLevel::Poor, 0),
        ] {
            assert_eq!(summary.quality_distribution.count(level), expected, "{level}");
        }
    }

    #[test]
    fn test_summary_empty() {
        let empty: [OverallQuality; 0] = [];
        let summary = summarize(&empty);
        assert_eq!(summary.total_texts, 0);
        assert_eq!(summary.average_quality_score, 0.0);
        assert_eq!(summary.quality_distribution, QualityDistribution::default());
    }

    /// Translator that always returns a fixed output, for driving the pipeline
    struct FixedTranslator {
        output: &'static str,
        confidence: f64,
    }

    impl Translator for FixedTranslator {
        fn translate(&self, text: &str, direction: Direction) -> TranslationResult {
            TranslationResult {
                original: text.to_string(),
                translated: self.output.to_string(),
                confidence: self.confidence,
                direction,
                timestamp: Utc::now(),
            }
        }

        fn detect_language(&self, _text: &str) -> DetectedLanguage {
            DetectedLanguage::Unknown
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_pipeline_with_custom_translator() {
        let p = BackTranslator::new(FixedTranslator {
            output: "one two",
            confidence: 50.0,
        });
        let result = p.back_translate("one two three four", Direction::EnToIg);

        assert_eq!(result.quality_metrics.similarity_score, 50.0);
        assert_eq!(result.overall_quality.overall_score, 50.0);
        assert_eq!(result.overall_quality.quality_level, QualityLevel::Fair);
    }
}
