use axum::Json;
use axum::extract::State;
use serde::Serialize;

use rsems_core::keys;
use rsems_core::models::daily_log::DailyLog;
use rsems_core::models::profile::Profile;
use rsems_storage::documents;
use rsems_triage::worklist::{WorklistEntry, WorklistSummary, build_worklist, summarize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WorklistResponse {
    pub entries: Vec<WorklistEntry>,
    pub summary: WorklistSummary,
}

/// Each patient's latest log, most urgent first.
///
/// Reads one latest-log document per patient rather than the full history.
pub async fn get_worklist(
    State(state): State<AppState>,
) -> Result<Json<WorklistResponse>, ApiError> {
    let logs: Vec<DailyLog> =
        documents::list_json(&state.s3, &state.bucket, keys::LATEST_LOGS_PREFIX).await?;
    let profiles: Vec<Profile> =
        documents::list_json(&state.s3, &state.bucket, keys::PROFILES_PREFIX).await?;

    let entries = build_worklist(&logs, &profiles);
    let summary = summarize(&entries);
    tracing::debug!(
        patients = summary.total,
        critical = summary.critical,
        "worklist built"
    );

    Ok(Json(WorklistResponse { entries, summary }))
}
