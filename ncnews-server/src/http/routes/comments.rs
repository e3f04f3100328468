//! Comment endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Comment, CommentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiPath};
use crate::http::server::AppState;
use super::timestamp;

/// Create comment request
#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

/// Comment response
#[derive(Serialize)]
pub struct CommentResponse {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            comment_id: c.comment_id,
            article_id: c.article_id,
            author: c.author,
            body: c.body,
            votes: c.votes,
            created_at: timestamp(&c.created_at),
        }
    }
}

#[derive(Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentResponse>,
}

#[derive(Serialize)]
pub struct CreatedCommentResponse {
    pub comment: CommentResponse,
}

/// GET /api/articles/{article_id}/comments
async fn list_comments(
    State(state): State<Arc<AppState>>,
    ApiPath(article_id): ApiPath<String>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let comments = CommentRepo::new(&state.pool)
        .list_for_article(&article_id)
        .await?;

    Ok(Json(CommentsResponse {
        comments: comments.into_iter().map(CommentResponse::from).collect(),
    }))
}

/// POST /api/articles/{article_id}/comments
async fn create_comment(
    State(state): State<Arc<AppState>>,
    ApiPath(article_id): ApiPath<String>,
    ApiJson(req): ApiJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CreatedCommentResponse>), ApiError> {
    let comment = CommentRepo::new(&state.pool)
        .create(&article_id, req.username.as_deref(), req.body.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedCommentResponse {
            comment: CommentResponse::from(comment),
        }),
    ))
}

/// DELETE /api/comments/{comment_id}
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    ApiPath(comment_id): ApiPath<String>,
) -> Result<StatusCode, ApiError> {
    CommentRepo::new(&state.pool).delete(&comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/articles/{article_id}/comments",
            get(list_comments).post(create_comment),
        )
        .route("/api/comments/{comment_id}", delete(delete_comment))
}
