use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::history::HistoryConfig;
use self::logging::LoggingConfig;
use self::server::ServerConfig;
use self::suggestions::SuggestionsConfig;

pub mod dictionary;
pub mod history;
pub mod logging;
pub mod server;
pub mod suggestions;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub suggestions: SuggestionsConfig,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Build from `LEXIS_*` environment variables, defaulting anything unset
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            dictionary: DictionaryConfig::new(),
            suggestions: SuggestionsConfig::default(),
            history: HistoryConfig::new(),
            logging: LoggingConfig::new(),
        }
    }

    /// Load a JSON config file. Missing sections and fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
