use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::Severity;

/// Grouping used by the symptom catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SymptomCategory {
    General,
    #[serde(rename = "Nausea/Vomiting")]
    NauseaVomiting,
    #[serde(rename = "Toilet/Bowel")]
    ToiletBowel,
    #[serde(rename = "Toilet/Urinary")]
    ToiletUrinary,
    #[serde(rename = "Vaginal/Pelvic")]
    VaginalPelvic,
    Skin,
    Pain,
    #[serde(rename = "Sleep/Mental")]
    SleepMental,
    Other,
}

/// A catalog entry patients pick symptoms from.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomDefinition {
    pub id: i64,
    pub name: String,
    pub category: SymptomCategory,
    /// Suggested grade shown when the symptom is first selected. Never
    /// submitted on the patient's behalf.
    #[ts(type = "0 | 1 | 2 | 3")]
    pub default_severity: Severity,
    pub description: Option<String>,
    pub clinical_notes: Option<String>,
    pub is_active: bool,
    pub created_at: jiff::Timestamp,
}

impl SymptomDefinition {
    /// Build a submission entry for this symptom at an explicit grade,
    /// copying the display name so the log stays stable if the catalog changes.
    pub fn entry(&self, severity: i64) -> SymptomEntry {
        SymptomEntry {
            symptom_id: self.id,
            symptom_name: self.name.clone(),
            severity,
            notes: None,
        }
    }
}

/// One selected symptom as submitted by the client. The severity is the raw
/// value the client sent and has not been range-checked yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomEntry {
    pub symptom_id: i64,
    pub symptom_name: String,
    pub severity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A validated symptom within a daily log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomObservation {
    pub symptom_id: i64,
    pub symptom_name: String,
    #[ts(type = "0 | 1 | 2 | 3")]
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
