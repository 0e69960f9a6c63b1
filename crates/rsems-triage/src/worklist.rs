//! Clinician worklist ordering.
//!
//! Every view that lists patients by priority sorts by risk score descending,
//! then by submission time descending (most recent first among equal scores).
//! Log id breaks any remaining tie so the order is stable across requests.

use std::cmp::Ordering;
use std::collections::HashMap;

use rsems_core::models::daily_log::DailyLog;
use rsems_core::models::profile::Profile;
use rsems_core::models::severity::Severity;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::scoring::RiskBand;

/// Anything that can be placed on a priority list.
pub trait Urgency {
    fn risk_score(&self) -> Severity;
    fn submitted_at(&self) -> jiff::Timestamp;
    fn log_id(&self) -> Uuid;
}

impl Urgency for DailyLog {
    fn risk_score(&self) -> Severity {
        self.risk_score
    }

    fn submitted_at(&self) -> jiff::Timestamp {
        self.created_at
    }

    fn log_id(&self) -> Uuid {
        self.id
    }
}

/// One row of the clinician worklist: a patient's most recent log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorklistEntry {
    pub log_id: Uuid,
    pub patient_id: Uuid,
    pub full_name: String,
    pub cancer_type: String,
    pub log_date: jiff::civil::Date,
    pub created_at: jiff::Timestamp,
    #[ts(type = "0 | 1 | 2 | 3")]
    pub risk_score: Severity,
    pub requires_action: bool,
    pub band: RiskBand,
    pub symptom_count: usize,
}

impl Urgency for WorklistEntry {
    fn risk_score(&self) -> Severity {
        self.risk_score
    }

    fn submitted_at(&self) -> jiff::Timestamp {
        self.created_at
    }

    fn log_id(&self) -> Uuid {
        self.log_id
    }
}

/// Counts shown above the worklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorklistSummary {
    pub critical: usize,
    pub monitor: usize,
    pub stable: usize,
    pub total: usize,
}

/// `Less` means `a` is more urgent and sorts first.
pub fn compare_urgency<T: Urgency + ?Sized>(a: &T, b: &T) -> Ordering {
    b.risk_score()
        .cmp(&a.risk_score())
        .then_with(|| b.submitted_at().cmp(&a.submitted_at()))
        .then_with(|| a.log_id().cmp(&b.log_id()))
}

pub fn sort_by_urgency<T: Urgency>(items: &mut [T]) {
    items.sort_by(|a, b| compare_urgency(a, b));
}

/// The most recent log of each patient, in no particular order.
pub fn latest_per_patient(logs: &[DailyLog]) -> Vec<&DailyLog> {
    let mut latest: HashMap<Uuid, &DailyLog> = HashMap::new();
    for log in logs {
        latest
            .entry(log.owner)
            .and_modify(|current| {
                if (log.created_at, log.id) > (current.created_at, current.id) {
                    *current = log;
                }
            })
            .or_insert(log);
    }
    latest.into_values().collect()
}

/// Build the worklist: one row per patient with a profile, using that
/// patient's latest log, sorted by urgency.
pub fn build_worklist(logs: &[DailyLog], profiles: &[Profile]) -> Vec<WorklistEntry> {
    let profiles: HashMap<Uuid, &Profile> = profiles.iter().map(|p| (p.id, p)).collect();

    let mut entries: Vec<WorklistEntry> = latest_per_patient(logs)
        .into_iter()
        .filter_map(|log| {
            let profile = profiles.get(&log.owner)?;
            Some(WorklistEntry {
                log_id: log.id,
                patient_id: log.owner,
                full_name: profile.full_name.clone(),
                cancer_type: profile.cancer_type.clone(),
                log_date: log.log_date,
                created_at: log.created_at,
                risk_score: log.risk_score,
                requires_action: log.requires_action,
                band: RiskBand::from(log.risk_score),
                symptom_count: log.symptom_count(),
            })
        })
        .collect();

    sort_by_urgency(&mut entries);
    entries
}

pub fn summarize(entries: &[WorklistEntry]) -> WorklistSummary {
    let mut summary = WorklistSummary {
        total: entries.len(),
        ..Default::default()
    };
    for entry in entries {
        match entry.band {
            RiskBand::Critical => summary.critical += 1,
            RiskBand::Monitor => summary.monitor += 1,
            RiskBand::Stable => summary.stable += 1,
        }
    }
    summary
}
