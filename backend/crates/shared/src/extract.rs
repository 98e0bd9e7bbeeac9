//! Request extractors
//!
//! [`JsonBody`] behaves like `axum::Json` but reports rejections through
//! [`AppError`]: a missing `application/json` content type is 415, every
//! other body problem (empty, malformed, missing field) is 400.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON request body with the API's rejection mapping
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(e)) => {
                tracing::warn!("Request body is not JSON");
                Err(AppError::unsupported_media_type("Expected an application/json body")
                    .with_source(e))
            }
            Err(rejection) => {
                tracing::warn!(reason = %rejection.body_text(), "Invalid or incomplete data submitted");
                Err(AppError::bad_request(rejection.body_text()))
            }
        }
    }
}
