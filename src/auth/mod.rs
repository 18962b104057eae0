//! Session assertions: signed, time-bound JWTs binding a principal's id,
//! role, and email.

pub mod password;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SecurityConfig;
use crate::models::{Principal, Role};
use crate::store::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal id. Named `id` because the dashboard client decodes it as such.
    pub id: String,
    pub role: Role,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Authenticated identity bound to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: String,
    pub role: Role,
    pub email: String,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<Claims> for Caller {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            role: claims.role,
            email: claims.email,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Unauthenticated(String),
    #[error("Token is not valid: {0}")]
    InvalidToken(String),
    #[error("Token has expired")]
    TokenExpired,
    #[error("JWT secret not configured")]
    InvalidSecret,
    #[error("session lifetime must be between 1 and {max} seconds, got {0}", max = MAX_SESSION_LIFETIME_SECS)]
    InvalidLifetime(u64),
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("crypto error: {0}")]
    Crypto(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Upper bound for a configured session lifetime (one year).
pub const MAX_SESSION_LIFETIME_SECS: u64 = 365 * 24 * 60 * 60;

/// `None` for zero or anything above [`MAX_SESSION_LIFETIME_SECS`].
pub fn session_lifetime(secs: u64) -> Option<Duration> {
    if secs == 0 || secs > MAX_SESSION_LIFETIME_SECS {
        return None;
    }
    i64::try_from(secs).ok().and_then(Duration::try_seconds)
}

/// Issues and verifies session tokens. Holds no per-session state, so a
/// token stays valid until it expires.
#[derive(Clone)]
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl SessionIssuer {
    pub fn new(secret: &str, lifetime_secs: u64) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::InvalidSecret);
        }
        let lifetime = session_lifetime(lifetime_secs).ok_or(AuthError::InvalidLifetime(lifetime_secs))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, AuthError> {
        Self::new(&security.jwt_secret, security.jwt_expiry_secs)
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn issue(&self, principal: &Principal) -> Result<String, AuthError> {
        self.issue_at(principal, Utc::now())
    }

    pub fn issue_at(&self, principal: &Principal, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            id: principal.id.clone(),
            role: principal.role,
            email: principal.email.clone(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Check signature and shape, then expiry against `now` with no leeway.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?
            .claims;

        if claims.exp <= now.timestamp() {
            return Err(AuthError::TokenExpired);
        }
        Ok(claims)
    }
}
