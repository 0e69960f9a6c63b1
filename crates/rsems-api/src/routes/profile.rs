use axum::body::Bytes;
use axum::extract::State;
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::Deserialize;

use rsems_core::keys;
use rsems_core::models::profile::{Profile, UserRole};
use rsems_storage::documents;
use rsems_storage::error::StorageError;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Fields a user may set on their own profile. The role is managed
/// outside this service.
#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub cancer_type: String,
    #[serde(default)]
    pub treatment_start_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<jiff::civil::Date>,
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Profile>, ApiError> {
    let profile = documents::load_json(&state.s3, &state.bucket, &keys::profile(user.id)).await?;
    Ok(Json(profile))
}

/// Create or update the caller's profile.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> Result<Json<Profile>, ApiError> {
    let update: ProfileUpdate = serde_json::from_slice(&body)?;
    if update.full_name.trim().is_empty() {
        return Err(ApiError::BadRequest("full_name must not be empty".to_string()));
    }

    let key = keys::profile(user.id);
    let now = Timestamp::now();

    let existing: Option<Profile> =
        match documents::load_json(&state.s3, &state.bucket, &key).await {
            Ok(profile) => Some(profile),
            Err(StorageError::NotFound { .. }) => None,
            Err(e) => return Err(e.into()),
        };

    let profile = Profile {
        id: user.id,
        full_name: update.full_name.trim().to_string(),
        role: existing.as_ref().map_or(UserRole::Patient, |p| p.role),
        cancer_type: update.cancer_type,
        treatment_start_date: update.treatment_start_date,
        phone_number: update.phone_number,
        date_of_birth: update.date_of_birth,
        created_at: existing.as_ref().map_or(now, |p| p.created_at),
        updated_at: now,
    };

    documents::save_json(&state.s3, &state.bucket, &key, &profile).await?;
    tracing::info!(user = %user.id, "profile saved");

    Ok(Json(profile))
}
