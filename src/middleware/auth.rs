use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth::{AuthError, Caller};
use crate::error::ApiError;

/// JWT authentication middleware that validates tokens and binds the caller
///
/// Never consults the store; the token alone establishes identity.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = {
        let token = extract_bearer_token(request.headers())?;
        state.sessions.issuer().verify(token)?
    };

    let caller = Caller::from(claims);
    tracing::debug!("Authenticated '{}' as {}", caller.id, caller.role);
    request.extensions_mut().insert(caller);

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AuthError::Unauthenticated("No token provided".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::Unauthenticated("Invalid Authorization header format".to_string()))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::Unauthenticated("Authorization header must use Bearer token format".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(AuthError::Unauthenticated("No token provided".to_string()));
    }
    Ok(token)
}

/// The caller bound by [`jwt_auth_middleware`].
#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Caller>()
            .cloned()
            .ok_or_else(|| ApiError::unauthenticated("Authentication required"))
    }
}
