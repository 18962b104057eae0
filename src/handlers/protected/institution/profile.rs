use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult, InstitutionScope};
use crate::models::Institution;
use crate::services::institution_service::InstitutionUpdate;

/// GET /api/institutions/:institution_id
pub async fn profile_get(State(state): State<AppState>, scope: InstitutionScope) -> ApiResult<Institution> {
    let institution = state.institutions.get(&scope.institution_id).await?;
    Ok(ApiResponse::success(institution))
}

/// PUT /api/institutions/:institution_id - Partial profile update
///
/// Editable: `name`, `description`, `entryFee`, `location`, `workingHours`.
/// Identity and verification fields in the body are ignored.
pub async fn profile_put(
    State(state): State<AppState>,
    scope: InstitutionScope,
    payload: Result<Json<InstitutionUpdate>, JsonRejection>,
) -> ApiResult<Institution> {
    let Json(update) = payload?;
    let institution = state.institutions.update_profile(&scope.institution_id, update).await?;
    Ok(ApiResponse::success(institution).with_message("Profile updated"))
}
