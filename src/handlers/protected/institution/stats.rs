use axum::extract::State;

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult, InstitutionScope};
use crate::models::InstitutionStats;

/// GET /api/institutions/:institution_id/stats
pub async fn stats_get(State(state): State<AppState>, scope: InstitutionScope) -> ApiResult<InstitutionStats> {
    let stats = state.stats.institution_stats(&scope.institution_id).await?;
    Ok(ApiResponse::success(stats))
}
