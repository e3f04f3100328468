//! Article endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::repos::{Article, ArticleRepo, ArticleSummary};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::http::server::AppState;
use crate::models::ArticleQuery;
use super::timestamp;

/// Listing query params
#[derive(Debug, Deserialize, Default)]
pub struct ListArticlesParams {
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
    pub topic: Option<String>,
}

/// Vote patch request. Kept untyped so that a wrong type is reported as an
/// invalid `inc_votes`, not as a malformed body.
#[derive(Deserialize)]
pub struct UpdateVotesRequest {
    pub inc_votes: Option<Value>,
}

/// Article response
#[derive(Serialize)]
pub struct ArticleResponse {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
    pub votes: i32,
    pub comment_count: i64,
}

impl From<Article> for ArticleResponse {
    fn from(a: Article) -> Self {
        Self {
            article_id: a.article_id,
            title: a.title,
            topic: a.topic,
            author: a.author,
            body: a.body,
            created_at: timestamp(&a.created_at),
            votes: a.votes,
            comment_count: a.comment_count,
        }
    }
}

/// Article list entry
#[derive(Serialize)]
pub struct ArticleSummaryResponse {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: String,
    pub votes: i32,
    pub comment_count: i64,
}

impl From<ArticleSummary> for ArticleSummaryResponse {
    fn from(a: ArticleSummary) -> Self {
        Self {
            article_id: a.article_id,
            title: a.title,
            topic: a.topic,
            author: a.author,
            created_at: timestamp(&a.created_at),
            votes: a.votes,
            comment_count: a.comment_count,
        }
    }
}

#[derive(Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleSummaryResponse>,
}

/// GET /api/articles?sort_by=&order_by=&topic=
async fn list_articles(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ListArticlesParams>,
) -> Result<Json<ArticlesResponse>, ApiError> {
    let query = ArticleQuery {
        sort_by: params.sort_by.as_deref(),
        order_by: params.order_by.as_deref(),
        topic: params.topic.as_deref(),
    };
    let articles = ArticleRepo::new(&state.pool).list(query).await?;

    Ok(Json(ArticlesResponse {
        articles: articles.into_iter().map(ArticleSummaryResponse::from).collect(),
    }))
}

/// GET /api/articles/{article_id}
async fn get_article(
    State(state): State<Arc<AppState>>,
    ApiPath(article_id): ApiPath<String>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article = ArticleRepo::new(&state.pool).get(&article_id).await?;
    Ok(Json(ArticleResponse::from(article)))
}

/// PATCH /api/articles/{article_id}
async fn update_votes(
    State(state): State<Arc<AppState>>,
    ApiPath(article_id): ApiPath<String>,
    ApiJson(req): ApiJson<UpdateVotesRequest>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article = ArticleRepo::new(&state.pool)
        .update_votes(&article_id, req.inc_votes.as_ref())
        .await?;
    Ok(Json(ArticleResponse::from(article)))
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/articles", get(list_articles))
        .route("/api/articles/{article_id}", get(get_article).patch(update_votes))
}
