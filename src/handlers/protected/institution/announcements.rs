use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::app::AppState;
use crate::middleware::{Acknowledgement, ApiResponse, ApiResult, InstitutionScope};
use crate::models::Announcement;
use crate::services::announcement_service::AnnouncementInput;

pub async fn announcements_get(
    State(state): State<AppState>,
    scope: InstitutionScope,
) -> ApiResult<Vec<Announcement>> {
    let announcements = state.announcements.list(&scope.institution_id).await?;
    Ok(ApiResponse::success(announcements))
}

pub async fn announcements_post(
    State(state): State<AppState>,
    scope: InstitutionScope,
    payload: Result<Json<AnnouncementInput>, JsonRejection>,
) -> ApiResult<Announcement> {
    let Json(input) = payload?;
    let announcement = state.announcements.create(&scope.institution_id, input).await?;
    Ok(ApiResponse::created(announcement).with_message("Announcement created"))
}

pub async fn announcement_put(
    State(state): State<AppState>,
    scope: InstitutionScope,
    Path((_, announcement_id)): Path<(String, String)>,
    payload: Result<Json<AnnouncementInput>, JsonRejection>,
) -> ApiResult<Announcement> {
    let Json(input) = payload?;
    let announcement = state
        .announcements
        .update(&scope.institution_id, &announcement_id, input)
        .await?;
    Ok(ApiResponse::success(announcement).with_message("Announcement updated"))
}

pub async fn announcement_delete(
    State(state): State<AppState>,
    scope: InstitutionScope,
    Path((_, announcement_id)): Path<(String, String)>,
) -> ApiResult<Acknowledgement> {
    state.announcements.delete(&scope.institution_id, &announcement_id).await?;
    Ok(ApiResponse::success(Acknowledgement::ok()).with_message("Announcement deleted"))
}
