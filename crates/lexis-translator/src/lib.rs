pub mod back_translation;
pub mod dictionary_translator;
pub mod quality;

pub use back_translation::BackTranslator;
pub use dictionary_translator::DictionaryTranslator;

use lexis_core::types::{DetectedLanguage, Direction, TranslationResult};

/// Translation provider interface
pub trait Translator: Send + Sync {
    /// Translate text in the given direction. Words the provider cannot
    /// translate degrade `confidence` instead of failing the call.
    fn translate(&self, text: &str, direction: Direction) -> TranslationResult;

    /// Share of `text`'s words the provider can translate in `direction`, 0-100
    fn coverage(&self, text: &str, direction: Direction) -> f64 {
        self.translate(text, direction).confidence
    }

    /// Detect language of text
    fn detect_language(&self, text: &str) -> DetectedLanguage;

    /// Get supported directions
    fn supported_directions(&self) -> Vec<Direction> {
        vec![Direction::EnToIg, Direction::IgToEn]
    }

    /// Provider name
    fn name(&self) -> &str;
}
