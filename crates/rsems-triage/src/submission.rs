use jiff::Timestamp;
use jiff::tz::TimeZone;
use rsems_core::models::daily_log::{DailyLog, LogSubmission};
use uuid::Uuid;

use crate::error::TriageError;
use crate::scoring::score_entries;

/// Turn a submission into the daily log record that gets persisted.
///
/// The triage fields are computed here, once. The log date defaults to the
/// UTC date of `created_at` and may be earlier but never later; blank notes
/// are dropped.
pub fn record_daily_log(
    owner: Uuid,
    submission: LogSubmission,
    created_at: Timestamp,
) -> Result<DailyLog, TriageError> {
    let (observations, triage) = score_entries(&submission.symptoms)?;

    let today = created_at.to_zoned(TimeZone::UTC).date();
    let log_date = submission.log_date.unwrap_or(today);
    if log_date > today {
        return Err(TriageError::FutureLogDate { log_date, today });
    }

    let notes = submission
        .notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    Ok(DailyLog {
        id: Uuid::new_v4(),
        owner,
        log_date,
        observations,
        risk_score: triage.risk_score,
        requires_action: triage.requires_action,
        notes,
        created_at,
    })
}
