//! Custom Axum extractors
//!
//! Wrappers around axum's own extractors whose rejections are `ApiError`,
//! so a request that fails to decode still gets a `{ msg }` body.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::models::ValidationError;
use super::error::ApiError;

/// JSON body whose rejection goes through `ApiError`, so malformed bodies
/// get the same `{ msg }` shape as every other failure.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                tracing::debug!(error = %e.body_text(), "Rejected request body");
                ApiError::Validation(ValidationError::MalformedBody {
                    reason: e.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

/// Path parameters, e.g. a segment that is not valid UTF-8 once decoded.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: PathRejection| {
                tracing::debug!(error = %e.body_text(), "Rejected path");
                ApiError::Validation(ValidationError::MalformedPath {
                    reason: e.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

/// Query string parameters; a repeated key is a rejection.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: QueryRejection| {
                tracing::debug!(error = %e.body_text(), "Rejected query string");
                ApiError::Validation(ValidationError::MalformedQuery {
                    reason: e.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}
