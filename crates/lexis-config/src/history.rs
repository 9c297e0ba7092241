use std::env;

use serde::{Deserialize, Serialize};

fn default_max_records_per_user() -> usize {
    1000
}

fn default_trend_window() -> usize {
    20
}

/// In-memory back-translation history kept for quality reports
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    /// Oldest records are dropped past this many per user
    #[serde(default = "default_max_records_per_user")]
    pub max_records_per_user: usize,
    /// Number of most recent scores in a report's trend
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_records_per_user: default_max_records_per_user(),
            trend_window: default_trend_window(),
        }
    }
}

impl HistoryConfig {
    pub fn new() -> Self {
        let max_records_per_user = env::var("LEXIS_HISTORY_MAX_RECORDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_records_per_user);

        let trend_window = env::var("LEXIS_HISTORY_TREND_WINDOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_trend_window);

        Self {
            max_records_per_user,
            trend_window,
        }
    }
}
