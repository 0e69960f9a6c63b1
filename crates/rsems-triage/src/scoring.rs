use rsems_core::models::severity::Severity;
use rsems_core::models::symptom::{SymptomEntry, SymptomObservation};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::TriageError;

/// Fixed classification of a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    /// Scores 0 and 1.
    Stable,
    /// Score 2. Elevated, but no action flag.
    Monitor,
    /// Score 3. Requires clinical action.
    Critical,
}

impl From<Severity> for RiskBand {
    fn from(score: Severity) -> Self {
        match score {
            Severity::None | Severity::Mild => RiskBand::Stable,
            Severity::Moderate => RiskBand::Monitor,
            Severity::Severe => RiskBand::Critical,
        }
    }
}

/// Outcome of scoring one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TriageResult {
    #[ts(type = "0 | 1 | 2 | 3")]
    pub risk_score: Severity,
    pub requires_action: bool,
}

impl TriageResult {
    pub fn band(&self) -> RiskBand {
        RiskBand::from(self.risk_score)
    }
}

/// Score a set of observations.
///
/// The risk score is the highest severity present, so one severe symptom
/// marks the whole submission critical no matter how many mild ones
/// accompany it. An empty set is rejected rather than scored as zero.
pub fn score(observations: &[SymptomObservation]) -> Result<TriageResult, TriageError> {
    let risk_score = observations
        .iter()
        .map(|o| o.severity)
        .max()
        .ok_or(TriageError::NoSymptoms)?;

    Ok(TriageResult {
        risk_score,
        requires_action: risk_score == Severity::Severe,
    })
}

/// Check raw submission entries and convert them into observations.
///
/// Fails on an empty submission, or on the first entry whose severity is
/// not one of 0, 1, 2, 3.
pub fn validate_entries(entries: &[SymptomEntry]) -> Result<Vec<SymptomObservation>, TriageError> {
    if entries.is_empty() {
        return Err(TriageError::NoSymptoms);
    }

    entries
        .iter()
        .map(|entry| -> Result<SymptomObservation, TriageError> {
            let severity = Severity::try_from(entry.severity).map_err(|_| {
                TriageError::InvalidSeverity {
                    symptom_id: entry.symptom_id,
                    symptom_name: entry.symptom_name.clone(),
                    value: entry.severity,
                }
            })?;

            Ok(SymptomObservation {
                symptom_id: entry.symptom_id,
                symptom_name: entry.symptom_name.clone(),
                severity,
                notes: entry.notes.clone(),
            })
        })
        .collect()
}

/// Validate raw entries, then score them.
pub fn score_entries(
    entries: &[SymptomEntry],
) -> Result<(Vec<SymptomObservation>, TriageResult), TriageError> {
    let observations = validate_entries(entries)?;
    let result = score(&observations)?;
    Ok((observations, result))
}
