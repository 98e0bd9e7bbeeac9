//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginDto, RegisterDto, TokenDto};

/// Shared state for user handlers
pub struct UsersAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

// Manual impl: only the `Arc`s are cloned, `R` itself need not be `Clone`.
impl<R> Clone for UsersAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

/// POST /api/users/register
pub async fn register<R>(
    State(state): State<UsersAppState<R>>,
    JsonBody(req): JsonBody<RegisterDto>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(RegisterInput {
            email_address: req.email_address,
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(StatusCode::OK)
}

/// POST /api/users/login
pub async fn login<R>(
    State(state): State<UsersAppState<R>>,
    JsonBody(req): JsonBody<LoginDto>,
) -> AuthResult<Json<TokenDto>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email_address: req.email_address,
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(TokenDto {
        token: output.token,
    }))
}
