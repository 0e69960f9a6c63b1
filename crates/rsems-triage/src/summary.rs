//! Per-patient dashboard figures derived from a patient's log history.

use std::collections::{BTreeSet, HashMap};

use jiff::civil::Date;
use rsems_core::models::daily_log::DailyLog;
use rsems_core::models::severity::Severity;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

const COMMON_SYMPTOM_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomStats {
    pub symptom_id: i64,
    pub symptom_name: String,
    pub occurrences: usize,
    pub average_severity: f64,
    #[ts(type = "0 | 1 | 2 | 3")]
    pub max_severity: Severity,
    pub last_reported: Date,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientSummary {
    pub total_logs: usize,
    /// Distinct log dates with at least one log requiring action.
    pub high_risk_days: usize,
    pub last_log_date: Option<Date>,
    /// Consecutive days with a log, ending today or yesterday.
    pub current_streak: usize,
    pub common_symptoms: Vec<SymptomStats>,
}

pub fn patient_summary(logs: &[DailyLog], today: Date) -> PatientSummary {
    let log_dates: BTreeSet<Date> = logs.iter().map(|l| l.log_date).collect();
    let high_risk_days = logs
        .iter()
        .filter(|l| l.requires_action)
        .map(|l| l.log_date)
        .collect::<BTreeSet<_>>()
        .len();

    PatientSummary {
        total_logs: logs.len(),
        high_risk_days,
        last_log_date: log_dates.last().copied(),
        current_streak: current_streak(&log_dates, today),
        common_symptoms: common_symptoms(logs),
    }
}

fn current_streak(log_dates: &BTreeSet<Date>, today: Date) -> usize {
    let Some(&latest) = log_dates.last() else {
        return 0;
    };
    if latest != today && today.yesterday().ok() != Some(latest) {
        return 0;
    }

    let mut streak = 0;
    let mut expected = Some(latest);
    for date in log_dates.iter().rev() {
        if Some(*date) != expected {
            break;
        }
        streak += 1;
        expected = date.yesterday().ok();
    }
    streak
}

struct Tally {
    name: String,
    occurrences: usize,
    severity_total: u32,
    max_severity: Severity,
    last_reported: Date,
    last_seen: jiff::Timestamp,
}

fn common_symptoms(logs: &[DailyLog]) -> Vec<SymptomStats> {
    let mut tallies: HashMap<i64, Tally> = HashMap::new();

    for log in logs {
        for observation in &log.observations {
            let tally = tallies
                .entry(observation.symptom_id)
                .or_insert_with(|| Tally {
                    name: observation.symptom_name.clone(),
                    occurrences: 0,
                    severity_total: 0,
                    max_severity: observation.severity,
                    last_reported: log.log_date,
                    last_seen: log.created_at,
                });

            tally.occurrences += 1;
            tally.severity_total += u32::from(observation.severity.value());
            tally.max_severity = tally.max_severity.max(observation.severity);
            if log.created_at >= tally.last_seen {
                // Name follows the most recent report.
                tally.name = observation.symptom_name.clone();
                tally.last_seen = log.created_at;
                tally.last_reported = log.log_date;
            }
        }
    }

    let mut stats: Vec<SymptomStats> = tallies
        .into_iter()
        .map(|(symptom_id, t)| SymptomStats {
            symptom_id,
            symptom_name: t.name,
            occurrences: t.occurrences,
            average_severity: f64::from(t.severity_total) / t.occurrences as f64,
            max_severity: t.max_severity,
            last_reported: t.last_reported,
        })
        .collect();

    stats.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then_with(|| a.symptom_name.cmp(&b.symptom_name))
    });
    stats.truncate(COMMON_SYMPTOM_LIMIT);
    stats
}
