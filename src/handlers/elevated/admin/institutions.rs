use axum::extract::{Path, State};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::Institution;

/// GET /api/admin/institutions/verified
pub async fn verified_get(State(state): State<AppState>) -> ApiResult<Vec<Institution>> {
    Ok(ApiResponse::success(state.institutions.list_verified().await?))
}

/// GET /api/admin/institutions/pending
pub async fn pending_get(State(state): State<AppState>) -> ApiResult<Vec<Institution>> {
    Ok(ApiResponse::success(state.institutions.list_pending().await?))
}

/// POST /api/admin/institutions/:institution_id/approve
pub async fn approve_post(State(state): State<AppState>, Path(institution_id): Path<String>) -> ApiResult<Institution> {
    let institution = state.institutions.approve(&institution_id).await?;
    Ok(ApiResponse::success(institution).with_message("Institution approved"))
}

/// POST /api/admin/institutions/:institution_id/reject
pub async fn reject_post(State(state): State<AppState>, Path(institution_id): Path<String>) -> ApiResult<Institution> {
    let institution = state.institutions.reject(&institution_id).await?;
    Ok(ApiResponse::success(institution).with_message("Institution rejected"))
}
