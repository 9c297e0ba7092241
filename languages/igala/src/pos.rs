use std::collections::HashMap;

use lexis_core::dictionary::BilingualDictionary;
use lexis_core::language::tokenize;
use lexis_core::types::TaggedWord;

/// Part-of-speech tagger for English text (Penn Treebank tag names)
///
/// Tags come from, in order: the dictionary entry, a closed-class word table,
/// suffix rules, and finally `NN`.
#[derive(Debug)]
pub struct PosTagger {
    closed_class: HashMap<String, &'static str>,
}

impl PosTagger {
    /// Create a tagger without the closed-class table
    pub fn new() -> Self {
        Self {
            closed_class: HashMap::new(),
        }
    }

    /// Create with the common English function words
    pub fn with_defaults() -> Self {
        let mut closed_class = HashMap::new();

        let groups: [(&'static str, &[&str]); 10] = [
            ("DT", &["the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no"]),
            ("PRP", &["i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them"]),
            ("PRP$", &["my", "your", "his", "its", "our", "their"]),
            ("IN", &["in", "on", "at", "of", "for", "with", "from", "by", "about", "under", "over", "into", "after", "before"]),
            ("CC", &["and", "or", "but", "nor", "yet"]),
            ("TO", &["to"]),
            ("MD", &["can", "could", "will", "would", "shall", "should", "may", "might", "must"]),
            ("VBZ", &["is", "has", "does"]),
            ("VBP", &["am", "are", "have", "do"]),
            ("VBD", &["was", "were", "had", "did"]),
        ];

        for (tag, words) in groups {
            for word in words {
                closed_class.insert(word.to_string(), tag);
            }
        }

        for (word, tag) in [("not", "RB"), ("very", "RB"), ("be", "VB"), ("been", "VBN")] {
            closed_class.insert(word.to_string(), tag);
        }

        Self { closed_class }
    }

    /// Tag one normalized word
    pub fn tag_word(&self, dictionary: &dyn BilingualDictionary, word: &str) -> String {
        if let Some(pos) = dictionary.part_of_speech(word) {
            return pos.to_string();
        }

        if let Some(tag) = self.closed_class.get(word) {
            return tag.to_string();
        }

        suffix_tag(word).to_string()
    }

    /// Tag every token of `text`, in order
    pub fn tag(&self, dictionary: &dyn BilingualDictionary, text: &str) -> Vec<TaggedWord> {
        tokenize(text)
            .into_iter()
            .map(|token| TaggedWord {
                tag: self.tag_word(dictionary, &token.normalized),
                word: token.surface,
            })
            .collect()
    }

    /// Tags joined with `", "`
    pub fn tags_string(tagged: &[TaggedWord]) -> String {
        tagged
            .iter()
            .map(|t| t.tag.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn suffix_tag(word: &str) -> &'static str {
    if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return "CD";
    }

    let len = word.chars().count();
    if len > 3 && word.ends_with("ly") {
        "RB"
    } else if len > 4 && word.ends_with("ing") {
        "VBG"
    } else if len > 3 && word.ends_with("ed") {
        "VBD"
    } else if len > 3 && word.ends_with('s') && !word.ends_with("ss") {
        "NNS"
    } else {
        "NN"
    }
}
