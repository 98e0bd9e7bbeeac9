//! Bearer Guards
//!
//! Middleware for protected routes. Attach with
//! `axum::middleware::from_fn_with_state(guard, require_bearer)`.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{AccessClaims, TokenService};
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Debug, Clone)]
pub struct AuthGuard {
    tokens: Arc<TokenService>,
}

impl AuthGuard {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(Arc::new(TokenService::new(config)))
    }

    fn authenticate(&self, headers: &HeaderMap) -> AuthResult<AccessClaims> {
        let token = bearer_token(headers).ok_or(AuthError::MissingBearer)?;
        self.tokens.verify(token)
    }
}

/// Verified claims of the caller, stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AccessClaims);

/// Middleware that requires a valid bearer token
pub async fn require_bearer(
    State(guard): State<AuthGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = guard.authenticate(req.headers())?;
    req.extensions_mut().insert(CurrentUser(claims));
    Ok(next.run(req).await)
}

/// Middleware that requires a valid bearer token of an `Administrator`
pub async fn require_administrator(
    State(guard): State<AuthGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = guard.authenticate(req.headers())?;
    if !claims.has_role(UserRole::Administrator) {
        tracing::info!(user_id = claims.user_id, "Administrator role required");
        return Err(AuthError::Forbidden);
    }
    req.extensions_mut().insert(CurrentUser(claims));
    Ok(next.run(req).await)
}

/// Token from `Authorization: Bearer <token>` (scheme is case-insensitive)
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
