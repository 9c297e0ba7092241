use std::env;

use serde::{Deserialize, Serialize};

fn default_embedded() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Load the dictionary compiled into the binary
    #[serde(default = "default_embedded")]
    pub embedded: bool,
    /// Extra `.json`/`.tsv` dictionaries merged on top, in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            embedded: default_embedded(),
            additional_paths: vec![],
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let embedded = env::var("LEXIS_DICTIONARY_EMBEDDED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_embedded);

        // comma separated
        let additional_paths = env::var("LEXIS_DICTIONARY_PATHS")
            .map(|v| parse_path_list(&v))
            .unwrap_or_default();

        Self {
            embedded,
            additional_paths,
        }
    }
}

pub(crate) fn parse_path_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
