//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i32 },

    /// Path id below 1 or not matching the body id
    #[error("Missing data or invalid id")]
    InvalidId,

    /// Submitted model failed validation
    #[error("{0}")]
    Validation(String),

    /// The repository reported that nothing was written
    #[error("{0}: Failed")]
    OperationFailed(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::InvalidId | CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::OperationFailed(_) | CatalogError::Database(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::OperationFailed(action) => {
                tracing::error!(action = %action, "Repository reported failure");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            CatalogError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = CatalogError::NotFound {
            resource: "Author",
            id: 9,
        };
        assert_eq!(not_found.status_code(), 404);
        assert_eq!(not_found.to_string(), "Author 9 not found");
        assert_eq!(CatalogError::InvalidId.status_code(), 400);
        assert_eq!(CatalogError::validation("The Title field is required").status_code(), 400);
        assert_eq!(
            CatalogError::OperationFailed("Books - Create".into()).status_code(),
            500
        );
        assert_eq!(CatalogError::Database(sqlx::Error::PoolTimedOut).status_code(), 500);
    }

    #[tokio::test]
    async fn test_operation_failed_body_is_opaque() {
        let response = CatalogError::OperationFailed("Authors - Update".into()).into_response();
        assert_eq!(response.status(), 500);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], kernel::error::app_error::INTERNAL_ERROR_DETAIL);
    }
}
