//! Client Error Types
//!
//! Unexpected status codes are not errors: the repositories report them as
//! `None` / `false`. Errors cover transport, decoding, the token store and
//! models rejected before sending.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout or body decoding failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Token store file could not be read or written
    #[error("Token store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Token store file is not valid JSON
    #[error("Token store is corrupt: {0}")]
    Json(#[from] serde_json::Error),

    /// Model failed client-side validation and was not sent
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
