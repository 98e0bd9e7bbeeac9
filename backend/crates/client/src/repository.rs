//! Resource Repository
//!
//! One generic repository serves every resource collection. Status codes
//! other than the expected one are answered with `None` / `false`; only
//! transport and token store failures are errors.

use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::endpoints::item_url;
use crate::error::ClientResult;
use crate::token_store::TokenStore;

pub struct ResourceRepository<T, S> {
    http: reqwest::Client,
    tokens: Arc<S>,
    _resource: PhantomData<fn() -> T>,
}

impl<T, S> Clone for ResourceRepository<T, S> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            tokens: self.tokens.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T, S> ResourceRepository<T, S>
where
    T: Serialize + DeserializeOwned,
    S: TokenStore + Sync,
{
    pub fn new(http: reqwest::Client, tokens: Arc<S>) -> Self {
        Self {
            http,
            tokens,
            _resource: PhantomData,
        }
    }

    /// GET `{url}/{id}`; `None` unless the API answers 200
    pub async fn get(&self, url: &str, id: i32) -> ClientResult<Option<T>> {
        let url = item_url(url, id);
        let response = self.authorized(self.http.get(&url)).await?.send().await?;

        if response.status() != StatusCode::OK {
            tracing::debug!(%url, status = %response.status(), "Resource not returned");
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// GET `{url}`; `None` unless the API answers 200
    pub async fn get_all(&self, url: &str) -> ClientResult<Option<Vec<T>>> {
        let response = self.authorized(self.http.get(url)).await?.send().await?;

        if response.status() != StatusCode::OK {
            tracing::debug!(%url, status = %response.status(), "Collection not returned");
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// POST `{url}`; `true` on 201
    pub async fn create(&self, url: &str, resource: &T) -> ClientResult<bool> {
        let response = self
            .authorized(self.http.post(url).json(resource))
            .await?
            .send()
            .await?;

        Ok(expect_status(url, response.status(), StatusCode::CREATED))
    }

    /// PUT `{url}/{id}`; `true` on 204
    pub async fn update(&self, url: &str, id: i32, resource: &T) -> ClientResult<bool> {
        let url = item_url(url, id);
        let response = self
            .authorized(self.http.put(&url).json(resource))
            .await?
            .send()
            .await?;

        Ok(expect_status(&url, response.status(), StatusCode::NO_CONTENT))
    }

    /// DELETE `{url}/{id}`; `true` on 204. Ids below 1 are never sent.
    pub async fn delete(&self, url: &str, id: i32) -> ClientResult<bool> {
        if id < 1 {
            return Ok(false);
        }

        let url = item_url(url, id);
        let response = self
            .authorized(self.http.delete(&url))
            .await?
            .send()
            .await?;

        Ok(expect_status(&url, response.status(), StatusCode::NO_CONTENT))
    }

    async fn authorized(&self, request: RequestBuilder) -> ClientResult<RequestBuilder> {
        Ok(match self.tokens.get().await? {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }
}

fn expect_status(url: &str, actual: StatusCode, expected: StatusCode) -> bool {
    if actual == expected {
        return true;
    }
    tracing::debug!(%url, status = %actual, expected = %expected, "Unexpected status");
    false
}
