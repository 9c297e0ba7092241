use std::collections::BTreeSet;

use crate::preprocess::{DefaultPreprocessor, Preprocessor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    pub position: usize,
}

/// Break text into whitespace-separated word tokens, in order.
///
/// Tokens that are pure punctuation normalize to nothing and are dropped;
/// `position` is the index among the kept tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let preprocessor = DefaultPreprocessor;
    let text = preprocessor.process(text);

    text.split_whitespace()
        .filter_map(|surface| {
            let normalized = preprocessor.normalize_word(surface);
            (!normalized.is_empty()).then(|| (surface, normalized))
        })
        .enumerate()
        .map(|(position, (surface, normalized))| Token {
            surface: surface.to_string(),
            normalized,
            position,
        })
        .collect()
}

/// Distinct normalized words of `text`
pub fn word_set(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().map(|t| t.normalized).collect()
}
