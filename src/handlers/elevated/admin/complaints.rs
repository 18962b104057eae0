use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::Complaint;
use crate::services::complaint_service::ResolveComplaint;

/// GET /api/admin/complaints - Newest first
pub async fn complaints_get(State(state): State<AppState>) -> ApiResult<Vec<Complaint>> {
    Ok(ApiResponse::success(state.complaints.list().await?))
}

/// POST /api/admin/complaints/:complaint_id/resolve
///
/// Expected Input:
/// ```json
/// { "resolution": "Added a second entrance queue." }
/// ```
pub async fn resolve_post(
    State(state): State<AppState>,
    Path(complaint_id): Path<String>,
    payload: Result<Json<ResolveComplaint>, JsonRejection>,
) -> ApiResult<Complaint> {
    let Json(input) = payload?;
    let complaint = state.complaints.resolve(&complaint_id, input).await?;
    Ok(ApiResponse::success(complaint).with_message("Complaint resolved"))
}
