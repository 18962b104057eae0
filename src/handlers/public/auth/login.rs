use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::session_service::{LoginRequest, LoginResponse};

/// POST /api/auth/login - Authenticate with email and password
///
/// Expected Input:
/// ```json
/// { "email": "museum@example.com", "password": "password123" }
/// ```
///
/// Expected Output:
/// ```json
/// {
///   "success": true,
///   "data": {
///     "token": "jwt_token_string",
///     "user": { "id": "institution-user-id-1", "role": "institution", "name": "City Museum", "email": "museum@example.com" },
///     "expiresIn": 3600
///   }
/// }
/// ```
pub async fn login_post(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<LoginResponse> {
    let Json(request) = payload?;
    let response = state.sessions.login(request).await?;
    Ok(ApiResponse::success(response))
}
