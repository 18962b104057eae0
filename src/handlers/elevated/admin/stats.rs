use axum::extract::State;

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::AdminStats;

/// GET /api/admin/stats - Platform totals and monthly trends
pub async fn stats_get(State(state): State<AppState>) -> ApiResult<AdminStats> {
    let stats = state.stats.admin_stats().await?;
    Ok(ApiResponse::success(stats))
}
