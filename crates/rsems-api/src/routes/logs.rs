use axum::body::Bytes;
use axum::extract::State;
use axum::{Extension, Json};
use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::Serialize;
use uuid::Uuid;

use rsems_core::keys;
use rsems_core::models::daily_log::{DailyLog, LogSubmission};
use rsems_storage::documents;
use rsems_triage::submission::record_daily_log;
use rsems_triage::summary::{PatientSummary, patient_summary};
use rsems_triage::{RiskBand, TriageResult};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub log_id: Uuid,
    pub log_date: jiff::civil::Date,
    #[serde(flatten)]
    pub triage: TriageResult,
    pub band: RiskBand,
}

/// Score and persist a daily log for the caller.
///
/// Scoring happens before any storage call, so an empty or out-of-range
/// submission never reaches the bucket. After the write-once log, the
/// patient's latest-log document is overwritten for the worklist.
pub async fn submit_log(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let submission: LogSubmission = serde_json::from_slice(&body)?;
    let log = record_daily_log(user.id, submission, Timestamp::now())?;

    let key = keys::daily_log(log.owner, log.id);
    documents::create_json(&state.s3, &state.bucket, &key, &log).await?;

    // The log itself is stored; failing the request here would invite a
    // duplicate resubmission.
    let latest = keys::latest_log(log.owner);
    if let Err(e) = documents::save_json(&state.s3, &state.bucket, &latest, &log).await {
        tracing::error!(owner = %log.owner, log_id = %log.id, error = %e, "latest log not updated");
    }

    let triage = TriageResult {
        risk_score: log.risk_score,
        requires_action: log.requires_action,
    };
    tracing::info!(
        owner = %log.owner,
        log_id = %log.id,
        risk_score = log.risk_score.value(),
        requires_action = log.requires_action,
        symptom_count = log.symptom_count(),
        "daily_log_recorded"
    );
    if log.requires_action {
        tracing::warn!(owner = %log.owner, log_id = %log.id, "daily log requires clinical action");
    }

    Ok(Json(SubmissionResponse {
        log_id: log.id,
        log_date: log.log_date,
        band: triage.band(),
        triage,
    }))
}

async fn load_own_logs(state: &AppState, owner: Uuid) -> Result<Vec<DailyLog>, ApiError> {
    let prefix = keys::patient_logs_prefix(owner);
    let mut logs: Vec<DailyLog> = documents::list_json(&state.s3, &state.bucket, &prefix).await?;
    logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(logs)
}

/// The caller's own logs, newest first.
pub async fn list_logs(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<DailyLog>>, ApiError> {
    Ok(Json(load_own_logs(&state, user.id).await?))
}

pub async fn log_summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<PatientSummary>, ApiError> {
    let logs = load_own_logs(&state, user.id).await?;
    let today = Timestamp::now().to_zoned(TimeZone::UTC).date();
    Ok(Json(patient_summary(&logs, today)))
}
