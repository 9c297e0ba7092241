use serde::{Deserialize, Serialize};

fn default_limit() -> usize {
    5
}

fn default_max_limit() -> usize {
    50
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SuggestionsConfig {
    /// Used when a request does not pass `limit`
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Upper bound for a requested `limit`
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl SuggestionsConfig {
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}
