use std::env;

use serde::{Deserialize, Serialize};

fn default_filter() -> String {
    "info,tower_http=debug".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        let filter = env::var("LEXIS_LOG").unwrap_or_else(|_| default_filter());

        let json = env::var("LEXIS_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Self { filter, json }
    }
}
