//! Endpoint listing

use axum::{routing::get, Json, Router};
use once_cell::sync::Lazy;
use serde_json::Value;

/// Static description of every endpoint, embedded at build time.
static ENDPOINTS: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("endpoints.json")).expect("endpoints.json is valid JSON")
});

/// GET /api
async fn describe_api() -> Json<Value> {
    Json(ENDPOINTS.clone())
}

/// Endpoint listing routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api", get(describe_api))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_every_route() {
        let Json(body) = describe_api().await;
        let endpoints = body.as_object().unwrap();

        for key in [
            "GET /api",
            "GET /api/topics",
            "GET /api/articles",
            "GET /api/articles/:article_id",
            "PATCH /api/articles/:article_id",
            "GET /api/articles/:article_id/comments",
            "POST /api/articles/:article_id/comments",
            "DELETE /api/comments/:comment_id",
            "GET /api/users",
        ] {
            assert!(endpoints.contains_key(key), "missing {key}");
        }
    }
}
