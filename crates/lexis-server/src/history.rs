//! In-memory record of back-translation results per user, feeding the
//! quality report. Nothing here survives a restart.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use lexis_core::types::{BackTranslationResult, Direction, QualityDistribution, QualityLevel};
use lexis_translator::quality::round2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityRecord {
    pub id: Uuid,
    pub session_id: Option<String>,
    pub original_text: String,
    pub source_direction: Direction,
    pub overall_score: f64,
    pub quality_level: QualityLevel,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    pub overall_score: f64,
    pub quality_level: QualityLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub user_id: String,
    pub total_back_translations: usize,
    pub average_quality_score: f64,
    pub quality_distribution: QualityDistribution,
    /// Most recent scores, oldest first
    pub quality_trend: Vec<TrendPoint>,
}

pub struct QualityHistory {
    max_records_per_user: usize,
    records: HashMap<String, VecDeque<QualityRecord>>,
}

impl QualityHistory {
    pub fn new(max_records_per_user: usize) -> Self {
        Self {
            max_records_per_user: max_records_per_user.max(1),
            records: HashMap::new(),
        }
    }

    /// Store one result for `user_id`, evicting the user's oldest record when full
    pub fn record(
        &mut self,
        user_id: &str,
        session_id: Option<&str>,
        result: &BackTranslationResult,
    ) -> Uuid {
        let record = QualityRecord {
            id: Uuid::new_v4(),
            session_id: session_id.map(String::from),
            original_text: result.original_text.clone(),
            source_direction: result.source_direction,
            overall_score: result.overall_quality.overall_score,
            quality_level: result.overall_quality.quality_level,
            timestamp: result.timestamp,
        };
        let id = record.id;

        let records = self.records.entry(user_id.to_string()).or_default();
        if records.len() >= self.max_records_per_user {
            records.pop_front();
        }
        records.push_back(record);

        tracing::debug!(user_id, %id, stored = records.len(), "recorded back translation");
        id
    }

    pub fn records(&self, user_id: &str) -> impl Iterator<Item = &QualityRecord> {
        self.records.get(user_id).into_iter().flatten()
    }

    /// Aggregate a user's records. Unknown users get an empty report.
    pub fn report(&self, user_id: &str, trend_window: usize) -> QualityReport {
        let records: Vec<&QualityRecord> = self.records(user_id).collect();

        let total = records.len();
        let average_quality_score = if total == 0 {
            0.0
        } else {
            round2(records.iter().map(|r| r.overall_score).sum::<f64>() / total as f64)
        };

        let quality_distribution = records.iter().map(|r| r.quality_level).collect();

        let quality_trend = records[total.saturating_sub(trend_window)..]
            .iter()
            .map(|r| TrendPoint {
                timestamp: r.timestamp,
                overall_score: r.overall_score,
                quality_level: r.quality_level,
            })
            .collect();

        QualityReport {
            user_id: user_id.to_string(),
            total_back_translations: total,
            average_quality_score,
            quality_distribution,
            quality_trend,
        }
    }
}
