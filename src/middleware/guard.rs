//! Route-level authorization: runs after [`jwt_auth_middleware`] and
//! before any handler touches the store.
//!
//! [`jwt_auth_middleware`]: super::jwt_auth_middleware

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth::Caller;
use crate::error::ApiError;
use crate::services::OwnershipResolver;

/// Route parameter naming the institution a request acts on.
pub const INSTITUTION_PARAM: &str = "institution_id";

pub fn authorize_admin(caller: &Caller) -> Result<(), ApiError> {
    if caller.is_admin() {
        Ok(())
    } else {
        tracing::warn!("Admin route denied to '{}' ({})", caller.id, caller.role);
        Err(ApiError::forbidden("Access denied. Admin role required."))
    }
}

pub fn authorize_owner_or_admin(
    resolver: &dyn OwnershipResolver,
    caller: &Caller,
    institution_id: &str,
) -> Result<(), ApiError> {
    if resolver.may_act_for(caller, institution_id) {
        Ok(())
    } else {
        tracing::warn!(
            "Institution '{}' denied to '{}' ({})",
            institution_id,
            caller.id,
            caller.role
        );
        Err(ApiError::forbidden("Access denied. Not authorized for this institution."))
    }
}

/// Admin-only router layer.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let caller = request
        .extensions()
        .get::<Caller>()
        .ok_or_else(|| ApiError::unauthenticated("Authentication required"))?;
    authorize_admin(caller)?;

    Ok(next.run(request).await)
}

/// An authenticated caller cleared to act for the institution in the path.
///
/// The institution id is only ever taken from the route, never the body.
#[derive(Debug, Clone)]
pub struct InstitutionScope {
    pub caller: Caller,
    pub institution_id: String,
}

#[async_trait]
impl FromRequestParts<AppState> for InstitutionScope {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let caller = Caller::from_request_parts(parts, state).await?;

        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        let institution_id = params.get(INSTITUTION_PARAM).cloned().ok_or_else(|| {
            tracing::error!("Route is missing the :{} parameter", INSTITUTION_PARAM);
            ApiError::internal_error("Something went wrong!")
        })?;

        authorize_owner_or_admin(state.ownership.as_ref(), &caller, &institution_id)?;

        Ok(Self { caller, institution_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::services::StructuralOwnership;
    use axum::http::StatusCode;

    fn caller(id: &str, role: Role) -> Caller {
        Caller {
            id: id.into(),
            role,
            email: format!("{id}@example.com"),
        }
    }

    #[test]
    fn only_admins_pass_the_admin_check() {
        assert!(authorize_admin(&caller("admin-user-id", Role::Admin)).is_ok());
        for role in [Role::Institution, Role::User] {
            let err = authorize_admin(&caller("x", role)).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        }
    }

    #[test]
    fn owner_or_admin_matrix() {
        let resolver = StructuralOwnership;
        let target = "institution-user-id-1";

        // (role, caller id) x expected
        let cases = [
            (Role::Admin, target, true),
            (Role::Admin, "institution-user-id-2", true),
            (Role::Institution, target, true),
            (Role::Institution, "institution-user-id-2", false),
            (Role::User, target, false),
        ];
        for (role, id, allowed) in cases {
            let result = authorize_owner_or_admin(&resolver, &caller(id, role), target);
            assert_eq!(result.is_ok(), allowed, "{role} {id}");
            if let Err(err) = result {
                assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
            }
        }
    }
}
