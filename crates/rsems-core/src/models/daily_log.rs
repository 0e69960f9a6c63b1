use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::severity::Severity;
use super::symptom::{SymptomEntry, SymptomObservation};

/// One patient's symptom submission for a day.
///
/// `risk_score` and `requires_action` are computed once when the log is
/// created and are never recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyLog {
    pub id: Uuid,
    pub owner: Uuid,
    pub log_date: jiff::civil::Date,
    pub observations: Vec<SymptomObservation>,
    #[ts(type = "0 | 1 | 2 | 3")]
    pub risk_score: Severity,
    pub requires_action: bool,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl DailyLog {
    pub fn symptom_count(&self) -> usize {
        self.observations.len()
    }
}

/// Request body for a daily log submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LogSubmission {
    pub symptoms: Vec<SymptomEntry>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Defaults to the UTC date of submission.
    #[serde(default)]
    pub log_date: Option<jiff::civil::Date>,
}
