//! Users Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, UsersAppState};

/// Create the users router with PostgreSQL repository
pub fn users_router(repo: PgAuthRepository, config: Arc<AuthConfig>) -> Router {
    users_router_generic(repo, config)
}

/// Create a users router for any repository implementation
pub fn users_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
        tokens: Arc::new(TokenService::new(&config)),
        config,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
