use jiff::Timestamp;
use jiff::civil::{Date, date};
use rsems_core::models::daily_log::DailyLog;
use rsems_core::models::severity::Severity;
use rsems_core::models::symptom::SymptomObservation;
use rsems_triage::summary::patient_summary;
use uuid::Uuid;

fn observation(id: i64, name: &str, severity: Severity) -> SymptomObservation {
    SymptomObservation {
        symptom_id: id,
        symptom_name: name.to_string(),
        severity,
        notes: None,
    }
}

fn log(log_date: Date, observations: Vec<SymptomObservation>) -> DailyLog {
    let risk_score = observations.iter().map(|o| o.severity).max().unwrap();
    let created_at: Timestamp = log_date
        .at(12, 0, 0, 0)
        .to_zoned(jiff::tz::TimeZone::UTC)
        .unwrap()
        .timestamp();
    DailyLog {
        id: Uuid::new_v4(),
        owner: Uuid::nil(),
        log_date,
        observations,
        risk_score,
        requires_action: risk_score == Severity::Severe,
        notes: None,
        created_at,
    }
}

#[test]
fn no_history_yields_empty_summary() {
    let summary = patient_summary(&[], date(2025, 6, 10));
    assert_eq!(summary.total_logs, 0);
    assert_eq!(summary.high_risk_days, 0);
    assert_eq!(summary.last_log_date, None);
    assert_eq!(summary.current_streak, 0);
    assert!(summary.common_symptoms.is_empty());
}

#[test]
fn counts_streak_and_high_risk_days() {
    let logs = vec![
        log(date(2025, 6, 6), vec![observation(1, "Nausea", Severity::Mild)]),
        log(date(2025, 6, 8), vec![observation(1, "Nausea", Severity::Severe)]),
        log(date(2025, 6, 9), vec![observation(2, "Fatigue", Severity::Moderate)]),
        log(date(2025, 6, 9), vec![observation(1, "Nausea", Severity::Severe)]),
        log(date(2025, 6, 10), vec![observation(2, "Fatigue", Severity::Mild)]),
    ];

    let summary = patient_summary(&logs, date(2025, 6, 10));
    assert_eq!(summary.total_logs, 5);
    assert_eq!(summary.high_risk_days, 2);
    assert_eq!(summary.last_log_date, Some(date(2025, 6, 10)));
    assert_eq!(summary.current_streak, 3);
}

#[test]
fn streak_survives_until_end_of_next_day() {
    let logs = vec![log(date(2025, 6, 9), vec![observation(1, "Nausea", Severity::Mild)])];
    assert_eq!(patient_summary(&logs, date(2025, 6, 10)).current_streak, 1);
    assert_eq!(patient_summary(&logs, date(2025, 6, 11)).current_streak, 0);
}

#[test]
fn common_symptoms_ranked_by_occurrence() {
    let logs = vec![
        log(
            date(2025, 6, 1),
            vec![
                observation(1, "Nausea", Severity::Mild),
                observation(2, "Fatigue", Severity::Moderate),
            ],
        ),
        log(date(2025, 6, 2), vec![observation(1, "Nausea", Severity::Severe)]),
        log(date(2025, 6, 3), vec![observation(3, "Rash", Severity::Mild)]),
    ];

    let stats = patient_summary(&logs, date(2025, 6, 3)).common_symptoms;
    let names: Vec<&str> = stats.iter().map(|s| s.symptom_name.as_str()).collect();
    assert_eq!(names, vec!["Nausea", "Fatigue", "Rash"]);

    let nausea = &stats[0];
    assert_eq!(nausea.occurrences, 2);
    assert_eq!(nausea.average_severity, 2.0);
    assert_eq!(nausea.max_severity, Severity::Severe);
    assert_eq!(nausea.last_reported, date(2025, 6, 2));
}
