use std::path::Path;
use std::sync::Arc;

use lexis_core::dictionary::{BilingualDictionary, DictionaryMetadata};
use lexis_core::types::TaggedWord;

use crate::dictionary::IgalaDictionary;
use crate::loader::IgalaLoader;
use crate::pos::PosTagger;

/// English <-> Igala language processor
///
/// Owns the dictionary once it is built; everything after start-up only reads it.
#[derive(Debug)]
pub struct IgalaProcessor {
    dictionary: Arc<IgalaDictionary>,
    tagger: PosTagger,
}

impl IgalaProcessor {
    /// Create a new processor with the embedded dictionary only
    pub fn new() -> Self {
        Self::with_additional_dicts(true, &[])
    }

    /// Create a processor from the embedded dictionary (when `use_embedded`)
    /// with the files in `additional_paths` merged on top, in order
    pub fn with_additional_dicts(use_embedded: bool, additional_paths: &[String]) -> Self {
        let mut dict = if use_embedded {
            IgalaLoader::load_embedded().unwrap_or_else(|e| {
                tracing::error!("Failed to load embedded dictionary: {}", e);
                tracing::warn!("Starting with empty dictionary");
                IgalaDictionary::new()
            })
        } else {
            tracing::warn!("Embedded dictionary disabled");
            IgalaDictionary::new()
        };

        for path in additional_paths {
            match IgalaLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = IgalaLoader::merge(dict, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        Self::from_dictionary(dict)
    }

    pub fn from_dictionary(dictionary: IgalaDictionary) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
            tagger: PosTagger::with_defaults(),
        }
    }

    /// Shared handle to the dictionary for translators
    pub fn dictionary(&self) -> Arc<dyn BilingualDictionary> {
        self.dictionary.clone()
    }

    pub fn metadata(&self) -> DictionaryMetadata {
        self.dictionary.metadata()
    }

    /// Part-of-speech tags for English text
    pub fn tag(&self, text: &str) -> Vec<TaggedWord> {
        self.tagger.tag(self.dictionary.as_ref(), text)
    }
}

impl Default for IgalaProcessor {
    fn default() -> Self {
        Self::new()
    }
}
