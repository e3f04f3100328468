//! API error types with IntoResponse
//!
//! Every failure becomes `{ "msg": ... }`. Structured errors map directly;
//! database errors are classified by Postgres SQLSTATE; anything left is a
//! logged 500 with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::RepoError;
use crate::models::ValidationError;

/// SQLSTATE codes caused by bad client input rather than a server fault:
/// invalid_text_representation, numeric_value_out_of_range,
/// character_not_in_repertoire, not_null_violation, foreign_key_violation.
const CLIENT_SQLSTATES: [&str; 5] = ["22P02", "22003", "22021", "23502", "23503"];

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource or route not found (404)
    NotFound { message: String },

    /// Database error (400 for client-caused SQLSTATEs, otherwise 500, logged)
    Database(sqlx::Error),
}

impl ApiError {
    /// Uniform response for unmatched routes.
    pub fn invalid_path() -> Self {
        Self::NotFound {
            message: "Invalid path".to_owned(),
        }
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            Self::Database(e) if is_client_error(e) => (
                StatusCode::BAD_REQUEST,
                "Bad request: Invalid input".to_owned(),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        }
    }
}

fn is_client_error(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| is_client_sqlstate(&code))
}

fn is_client_sqlstate(code: &str) -> bool {
    CLIENT_SQLSTATES.iter().any(|c| *c == code)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Validation(v) => Self::Validation(v),
            RepoError::NotFound(message) => Self::NotFound { message },
            RepoError::Sqlx(e) => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_msg(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["msg"].as_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::MissingField { field: "username" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_msg(response).await, "Bad request: Invalid input in username");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(RepoError::NotFound(
            "No article found for article_id: 30000000".into(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_msg(response).await,
            "No article found for article_id: 30000000"
        );
    }

    #[tokio::test]
    async fn invalid_path_is_404() {
        let response = ApiError::invalid_path().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_msg(response).await, "Invalid path");
    }

    #[test]
    fn client_sqlstates() {
        // NUL in text
        assert!(is_client_sqlstate("22021"));
        assert!(is_client_sqlstate("23503"));
        // unique_violation, serialization_failure
        assert!(!is_client_sqlstate("23505"));
        assert!(!is_client_sqlstate("40001"));
    }

    #[tokio::test]
    async fn unclassified_database_error_is_500() {
        let err = ApiError::Database(sqlx::Error::PoolTimedOut);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_msg(response).await, "Internal server error");
    }
}
