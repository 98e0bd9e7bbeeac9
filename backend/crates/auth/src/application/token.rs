//! Bearer Token Service
//!
//! Issues and verifies the access tokens returned by login.

use chrono::Utc;
use kernel::id::UserId;
use platform::jwt::{JwtCodec, JwtError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Email address of the user
    pub sub: String,
    /// Random token id
    pub jti: String,
    /// Numeric user id
    #[serde(rename = "nameid")]
    pub user_id: i32,
    /// One entry per assigned role
    #[serde(rename = "role", default)]
    pub roles: Vec<String>,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
}

impl AccessClaims {
    pub fn has_role(&self, role: UserRole) -> bool {
        self.roles.iter().any(|r| r == role.name())
    }

    pub fn user_id(&self) -> UserId {
        UserId::from_i32(self.user_id)
    }
}

/// Signs and validates access tokens with the configured key and issuer
#[derive(Debug, Clone)]
pub struct TokenService {
    codec: JwtCodec,
    issuer: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            codec: JwtCodec::hs256(&config.jwt_secret, &config.jwt_issuer),
            issuer: config.jwt_issuer.clone(),
            ttl: config.token_ttl,
        }
    }

    /// Issue a token for a persisted user
    pub fn issue(&self, user: &User) -> AuthResult<String> {
        self.issue_for(user.email.as_str(), user.id, &user.roles)
    }

    pub fn issue_for(&self, email: &str, user_id: UserId, roles: &[UserRole]) -> AuthResult<String> {
        let claims = AccessClaims {
            sub: email.to_string(),
            jti: Uuid::new_v4().to_string(),
            user_id: user_id.as_i32(),
            roles: roles.iter().map(|r| r.name().to_string()).collect(),
            iss: self.issuer.clone(),
            aud: self.issuer.clone(),
            exp: Utc::now().timestamp() + self.ttl.as_secs() as i64,
        };

        self.codec.encode(&claims).map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Check signature, issuer, audience and expiry
    pub fn verify(&self, token: &str) -> AuthResult<AccessClaims> {
        self.codec.decode(token).map_err(|e| {
            match &e {
                JwtError::Expired => tracing::debug!("Bearer token expired"),
                _ => tracing::debug!(error = %e, "Bearer token rejected"),
            }
            AuthError::InvalidToken
        })
    }
}
