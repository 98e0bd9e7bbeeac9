//! Bookstore Client
//!
//! HTTP client for the bookstore API: a generic resource repository for
//! authors and books, an authentication repository and the token store it
//! keeps the bearer token in.
//!
//! ## Structure
//!
//! - `endpoints` - URL construction from a base address
//! - `models` - wire models and client-side validation
//! - `repository` - `ResourceRepository<T, S>` (GET/POST/PUT/DELETE)
//! - `auth` - register / log in / log out
//! - `token_store` - `TokenStore` trait, memory and file implementations

pub mod auth;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod repository;
pub mod token_store;

use std::sync::Arc;
use std::time::Duration;

pub use auth::AuthenticationRepository;
pub use endpoints::Endpoints;
pub use error::{ClientError, ClientResult};
pub use models::{AuthorModel, BookModel, LoginModel, RegistrationModel};
pub use repository::ResourceRepository;
pub use token_store::{AUTH_TOKEN_KEY, FileTokenStore, MemoryTokenStore, TokenStore};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a consumer of the API needs, sharing one token store
pub struct BookstoreClient<S> {
    pub endpoints: Endpoints,
    pub authors: ResourceRepository<AuthorModel, S>,
    pub books: ResourceRepository<BookModel, S>,
    pub auth: AuthenticationRepository<S>,
}

impl<S> BookstoreClient<S>
where
    S: TokenStore + Sync + 'static,
{
    pub fn new(base_url: impl Into<String>, tokens: S) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        let tokens = Arc::new(tokens);
        let endpoints = Endpoints::new(base_url);

        Ok(Self {
            authors: ResourceRepository::new(http.clone(), tokens.clone()),
            books: ResourceRepository::new(http.clone(), tokens.clone()),
            auth: AuthenticationRepository::new(http, tokens, endpoints.clone()),
            endpoints,
        })
    }
}
