use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default text cleanup: trim, NFC, single-line
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Igala tone marks must compose the same way on both sides of a lookup
        text = text.nfc().collect();

        text = text.replace(['\n', '\r', '\t'], " ").trim().to_string();

        text
    }

    /// Lookup key for a single word: lowercased, NFC, edge punctuation removed.
    ///
    /// Combining marks and inner apostrophes/hyphens are kept so `kọ́` and
    /// `don't` survive intact.
    fn normalize_word(&self, word: &str) -> String {
        let lowered: String = word.trim().to_lowercase().nfc().collect();
        lowered.trim_matches(is_punctuation).to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// ASCII punctuation plus the common typographic marks (quotes, dashes, ellipsis)
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}' | '«' | '»' | '¡' | '¿' | '·'
        )
}
