use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::{password, AuthError, Caller, SessionIssuer};
use crate::models::{Principal, Role};
use crate::store::PrincipalRepository;

const DECOY_PASSWORD: &str = "zyarat-decoy-credential";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub role: Role,
    pub name: String,
    pub email: String,
}

impl From<&Principal> for SessionUser {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id.clone(),
            role: principal.role,
            name: principal.name.clone(),
            email: principal.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
    pub expires_in: i64,
}

/// Credential checks and token issuance. Nothing is recorded server-side.
#[derive(Clone)]
pub struct SessionService {
    principals: Arc<dyn PrincipalRepository>,
    issuer: SessionIssuer,
    pepper: Option<String>,
    /// Verified against when the email is unknown, so both failures cost
    /// one Argon2 run.
    decoy_hash: String,
}

impl SessionService {
    pub fn new(
        principals: Arc<dyn PrincipalRepository>,
        issuer: SessionIssuer,
        pepper: Option<String>,
    ) -> Result<Self, AuthError> {
        let decoy_hash = password::hash_password(DECOY_PASSWORD, pepper.as_deref())?;
        Ok(Self {
            principals,
            issuer,
            pepper,
            decoy_hash,
        })
    }

    pub fn issuer(&self) -> &SessionIssuer {
        &self.issuer
    }

    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        let (Some(email), Some(candidate)) = (request.email, request.password) else {
            return Err(AuthError::InvalidCredentials);
        };

        let principal = match self.principals.find_by_email(&email).await? {
            Some(principal) => principal,
            None => {
                password::verify_password(&candidate, &self.decoy_hash, self.pepper.as_deref())?;
                tracing::warn!("Login failed: unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !password::verify_password(&candidate, &principal.password_hash, self.pepper.as_deref())? {
            tracing::warn!("Login failed: bad password for principal '{}'", principal.id);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(&principal)?;
        tracing::info!("Principal '{}' logged in as {}", principal.id, principal.role);

        Ok(LoginResponse {
            token,
            user: SessionUser::from(&principal),
            expires_in: self.issuer.lifetime().num_seconds(),
        })
    }

    /// Current profile of the authenticated caller.
    pub async fn whoami(&self, caller: &Caller) -> Result<SessionUser, AuthError> {
        self.principals
            .find(&caller.id)
            .await?
            .map(|principal| SessionUser::from(&principal))
            .ok_or_else(|| AuthError::Unauthenticated("Principal no longer exists".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{MUSEUM_ID, SEED_PASSWORD};
    use crate::store::Store;

    fn service() -> SessionService {
        let store = Store::seeded(None).unwrap();
        SessionService::new(store.principals, SessionIssuer::new("test-secret", 3600).unwrap(), None).unwrap()
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    #[tokio::test]
    async fn login_issues_a_token_for_the_principal() {
        let service = service();
        let response = service.login(request("museum@example.com", SEED_PASSWORD)).await.unwrap();

        assert_eq!(response.user.id, MUSEUM_ID);
        assert_eq!(response.user.role, Role::Institution);
        assert_eq!(response.expires_in, 3600);
        let claims = service.issuer().verify(&response.token).unwrap();
        assert_eq!(claims.id, MUSEUM_ID);
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_look_the_same() {
        let service = service();
        let unknown = service.login(request("nobody@example.com", SEED_PASSWORD)).await.unwrap_err();
        let wrong = service.login(request("museum@example.com", "password124")).await.unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn unknown_email_still_runs_the_password_verifier() {
        // A broken decoy hash surfaces as a crypto fault only if it was verified.
        let service = SessionService {
            decoy_hash: "not-a-phc-string".to_string(),
            ..service()
        };

        let err = service.login(request("nobody@example.com", SEED_PASSWORD)).await.unwrap_err();
        assert!(matches!(err, AuthError::Crypto(_)), "{err:?}");

        let known = service.login(request("museum@example.com", SEED_PASSWORD)).await;
        assert!(known.is_ok());
    }

    #[tokio::test]
    async fn email_match_is_exact() {
        let err = service().login(request("Museum@Example.com", SEED_PASSWORD)).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn missing_fields_are_invalid_credentials() {
        let err = service().login(LoginRequest::default()).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
