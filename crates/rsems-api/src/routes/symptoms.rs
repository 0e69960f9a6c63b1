use axum::Json;
use axum::extract::State;

use rsems_core::keys;
use rsems_core::models::symptom::SymptomDefinition;
use rsems_storage::documents;
use rsems_storage::error::StorageError;

use crate::error::ApiError;
use crate::state::AppState;

/// Active catalog entries, sorted by name.
pub async fn list_symptoms(
    State(state): State<AppState>,
) -> Result<Json<Vec<SymptomDefinition>>, ApiError> {
    let catalog: Vec<SymptomDefinition> =
        match documents::load_json(&state.s3, &state.bucket, keys::SYMPTOM_CATALOG).await {
            Ok(catalog) => catalog,
            Err(StorageError::NotFound { .. }) => {
                tracing::warn!("symptom catalog not found, serving empty catalog");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

    let mut active: Vec<SymptomDefinition> =
        catalog.into_iter().filter(|s| s.is_active).collect();
    active.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Json(active))
}
