//! Authentication Repository
//!
//! Registration and login against `/api/users`. A successful login stores
//! the returned token, which every `ResourceRepository` sharing the store
//! then sends as `Authorization: Bearer`.

use std::sync::Arc;

use crate::endpoints::Endpoints;
use crate::error::ClientResult;
use crate::models::{LoginModel, RegistrationModel, TokenResponse};
use crate::token_store::TokenStore;

pub struct AuthenticationRepository<S> {
    http: reqwest::Client,
    tokens: Arc<S>,
    endpoints: Endpoints,
}

impl<S> Clone for AuthenticationRepository<S> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            tokens: self.tokens.clone(),
            endpoints: self.endpoints.clone(),
        }
    }
}

impl<S> AuthenticationRepository<S>
where
    S: TokenStore + Sync,
{
    pub fn new(http: reqwest::Client, tokens: Arc<S>, endpoints: Endpoints) -> Self {
        Self {
            http,
            tokens,
            endpoints,
        }
    }

    /// `true` when the API accepted the registration
    ///
    /// Invalid models are rejected with `ClientError::Validation` before any
    /// request is made.
    pub async fn register(&self, model: &RegistrationModel) -> ClientResult<bool> {
        model.validate()?;

        let response = self
            .http
            .post(self.endpoints.register())
            .json(model)
            .send()
            .await?;

        let accepted = response.status().is_success();
        if !accepted {
            tracing::debug!(status = %response.status(), "Registration refused");
        }
        Ok(accepted)
    }

    /// `true` and the token stored when the credentials were accepted
    pub async fn log_in(&self, model: &LoginModel) -> ClientResult<bool> {
        model.validate()?;

        let response = self
            .http
            .post(self.endpoints.login())
            .json(model)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "Login refused");
            return Ok(false);
        }

        let TokenResponse { token } = response.json().await?;
        self.tokens.set(&token).await?;
        Ok(true)
    }

    pub async fn log_out(&self) -> ClientResult<()> {
        self.tokens.remove().await
    }

    /// Currently stored token, if logged in
    pub async fn token(&self) -> ClientResult<Option<String>> {
        self.tokens.get().await
    }
}
