use axum::extract::State;

use crate::app::AppState;
use crate::auth::Caller;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::session_service::SessionUser;

/// GET /api/auth/whoami - Profile of the principal the token was issued to
pub async fn whoami_get(State(state): State<AppState>, caller: Caller) -> ApiResult<SessionUser> {
    let user = state.sessions.whoami(&caller).await?;
    Ok(ApiResponse::success(user))
}
