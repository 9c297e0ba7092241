use std::sync::Arc;

use chrono::Utc;
use lexis_core::dictionary::BilingualDictionary;
use lexis_core::language::tokenize;
use lexis_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lexis_core::types::{
    BatchTranslation, DetectedLanguage, Direction, Language, TranslationResult,
};

use crate::Translator;
use crate::quality::round2;

/// Word-by-word translator over a bilingual dictionary
#[derive(Clone)]
pub struct DictionaryTranslator {
    dictionary: Arc<dyn BilingualDictionary>,
}

struct TokenLookup {
    words: Vec<String>,
    hits: usize,
}

impl TokenLookup {
    fn confidence(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        round2(self.hits as f64 / self.words.len() as f64 * 100.0)
    }
}

impl DictionaryTranslator {
    pub fn new(dictionary: Arc<dyn BilingualDictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &dyn BilingualDictionary {
        self.dictionary.as_ref()
    }

    /// Look up every token; a miss keeps the normalized token
    fn lookup_tokens(&self, text: &str, direction: Direction) -> TokenLookup {
        let mut hits = 0;
        let words = tokenize(text)
            .into_iter()
            .map(|token| match self.dictionary.lookup_exact(&token.normalized, direction) {
                Some(translated) => {
                    hits += 1;
                    translated.to_string()
                }
                None => token.normalized,
            })
            .collect();

        TokenLookup { words, hits }
    }

    /// Translate each text independently. `average_confidence` is 0 for no texts.
    pub fn translate_batch<S: AsRef<str>>(&self, texts: &[S], direction: Direction) -> BatchTranslation {
        let results: Vec<TranslationResult> = texts
            .iter()
            .map(|text| self.translate(text.as_ref(), direction))
            .collect();

        let average_confidence = if results.is_empty() {
            0.0
        } else {
            round2(results.iter().map(|r| r.confidence).sum::<f64>() / results.len() as f64)
        };

        BatchTranslation {
            results,
            average_confidence,
        }
    }

    /// Headwords of `language` starting with `partial`, sorted, at most `limit`
    pub fn suggestions(&self, partial: &str, language: Language, limit: usize) -> Vec<String> {
        let prefix = DefaultPreprocessor.normalize_word(partial);
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut matches: Vec<&str> = self
            .dictionary
            .headwords(language)
            .into_iter()
            .filter(|word| word.starts_with(prefix.as_str()))
            .collect();

        matches.sort_unstable();
        matches.dedup();
        matches.truncate(limit);
        matches.into_iter().map(String::from).collect()
    }
}

impl Translator for DictionaryTranslator {
    fn translate(&self, text: &str, direction: Direction) -> TranslationResult {
        let lookup = self.lookup_tokens(text, direction);
        tracing::debug!(
            %direction,
            tokens = lookup.words.len(),
            hits = lookup.hits,
            "dictionary translation"
        );

        TranslationResult {
            original: text.to_string(),
            confidence: lookup.confidence(),
            translated: lookup.words.join(" "),
            direction,
            timestamp: Utc::now(),
        }
    }

    fn coverage(&self, text: &str, direction: Direction) -> f64 {
        self.lookup_tokens(text, direction).confidence()
    }

    fn detect_language(&self, text: &str) -> DetectedLanguage {
        let tokens = tokenize(text);
        let count = |direction: Direction| {
            tokens
                .iter()
                .filter(|t| self.dictionary.lookup_exact(&t.normalized, direction).is_some())
                .count()
        };

        let english = count(Direction::EnToIg);
        let igala = count(Direction::IgToEn);

        match english.cmp(&igala) {
            std::cmp::Ordering::Greater => DetectedLanguage::English,
            std::cmp::Ordering::Less => DetectedLanguage::Igala,
            std::cmp::Ordering::Equal => DetectedLanguage::Unknown,
        }
    }

    fn name(&self) -> &str {
        "dictionary"
    }
}

#[cfg(test)]
mod tests {
    use lexis_lang_igala::IgalaProcessor;

    use super::*;

    fn translator() -> DictionaryTranslator {
        DictionaryTranslator::new(IgalaProcessor::new().dictionary())
    }

    #[test]
    fn test_translate_all_known() {
        let result = translator().translate("Hello world", Direction::EnToIg);
        assert_eq!(result.translated, "náàgò àná");
        assert_eq!(result.confidence, 100.0);
        assert_eq!(result.original, "Hello world");
        assert_eq!(result.direction, Direction::EnToIg);
    }

    #[test]
    fn test_translate_miss_echoes_word() {
        let result = translator().translate("eat the stone!", Direction::EnToIg);
        assert_eq!(result.translated, "jẹ the òkwúta");
        assert_eq!(result.confidence, 66.67);
    }

    #[test]
    fn test_translate_reverse() {
        let result = translator().translate("náàgò àná", Direction::IgToEn);
        assert_eq!(result.translated, "sympathy world");
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_translate_empty_input() {
        let result = translator().translate("   ", Direction::EnToIg);
        assert_eq!(result.translated, "");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_coverage_matches_translate() {
        let t = translator();
        for text in ["red house", "red dog", "", "dog"] {
            assert_eq!(
                t.coverage(text, Direction::EnToIg),
                t.translate(text, Direction::EnToIg).confidence
            );
        }
    }

    #[test]
    fn test_translate_batch() {
        let batch = translator().translate_batch(&["hello", "good morning", "red"], Direction::EnToIg);
        assert_eq!(batch.results.len(), 3);
        assert_eq!(batch.results[1].confidence, 0.0);
        assert_eq!(batch.average_confidence, 66.67);

        let empty: [&str; 0] = [];
        assert_eq!(translator().translate_batch(&empty, Direction::EnToIg).average_confidence, 0.0);
    }

    #[test]
    fn test_detect_language() {
        let t = translator();
        assert_eq!(t.detect_language("Hello world"), DetectedLanguage::English);
        assert_eq!(t.detect_language("jẹ òkwúta"), DetectedLanguage::Igala);
        assert_eq!(t.detect_language("good morning"), DetectedLanguage::Unknown);
        assert_eq!(t.detect_language(""), DetectedLanguage::Unknown);
    }

    #[test]
    fn test_suggestions() {
        let t = translator();
        assert_eq!(t.suggestions("WR", Language::English, 5), ["write"]);
        assert_eq!(t.suggestions("s", Language::English, 5), ["stone", "sympathy"]);
        assert_eq!(t.suggestions("s", Language::English, 1), ["stone"]);
        assert_eq!(t.suggestions("é", Language::Igala, 5), ["édúdú", "éfufu", "ékpikpa"]);
        assert!(t.suggestions("", Language::English, 5).is_empty());
        assert!(t.suggestions("zz", Language::English, 5).is_empty());
    }
}
