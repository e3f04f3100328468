//! Article repository
//!
//! Every read computes `comment_count` with a LEFT JOIN in the same query.
//! Vote changes are a single `UPDATE ... SET votes = votes + $1`, so
//! concurrent patches never lose increments.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};

use crate::models::{parse_id, ArticleQuery, ResolvedArticleQuery, VoteDelta};
use super::{RepoError, TopicRepo};

/// Article with its comment count
#[derive(Debug, Clone, FromRow)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

/// Article list entry (no body)
#[derive(Debug, Clone, FromRow)]
pub struct ArticleSummary {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

/// Article repository
pub struct ArticleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List articles, optionally filtered by topic, sorted by an allow-listed key.
    ///
    /// An empty result for a topic filter is an error: either the topic does
    /// not exist, or it exists but has no articles. The two get different
    /// messages.
    pub async fn list(&self, query: ArticleQuery<'_>) -> Result<Vec<ArticleSummary>, RepoError> {
        let resolved = query.resolve()?;
        let articles = self.fetch_list(&resolved).await?;

        if let (Some(topic), true) = (&resolved.topic, articles.is_empty()) {
            if !TopicRepo::new(self.pool).exists(topic).await? {
                return Err(RepoError::NotFound(format!("Topic {} not found", topic)));
            }
            return Err(RepoError::NotFound(format!(
                "No articles found for the topic {}",
                topic
            )));
        }

        Ok(articles)
    }

    async fn fetch_list(&self, q: &ResolvedArticleQuery) -> Result<Vec<ArticleSummary>, RepoError> {
        // Only static strings from SortBy/SortOrder are spliced in; the topic is bound.
        let sql = format!(
            r#"
            SELECT
                a.article_id,
                a.title,
                a.topic,
                a.author,
                a.created_at,
                a.votes,
                COUNT(c.comment_id) AS comment_count
            FROM articles a
            LEFT JOIN comments c ON c.article_id = a.article_id
            WHERE ($1::VARCHAR IS NULL OR a.topic = $1)
            GROUP BY a.article_id
            ORDER BY {column} {dir}, a.article_id {dir}
            "#,
            column = q.sort.column(),
            dir = q.order.keyword(),
        );

        tracing::debug!(sort = %q.sort, order = q.order.keyword(), topic = ?q.topic, "Listing articles");

        let articles = sqlx::query_as::<_, ArticleSummary>(&sql)
            .bind(q.topic.as_deref())
            .fetch_all(self.pool)
            .await?;
        Ok(articles)
    }

    /// Get a single article by its path id.
    pub async fn get(&self, raw_id: &str) -> Result<Article, RepoError> {
        let id = parse_id("article_id", raw_id)?;

        sqlx::query_as::<_, Article>(
            r#"
            SELECT
                a.article_id,
                a.title,
                a.topic,
                a.author,
                a.body,
                a.created_at,
                a.votes,
                COUNT(c.comment_id) AS comment_count
            FROM articles a
            LEFT JOIN comments c ON c.article_id = a.article_id
            WHERE a.article_id = $1
            GROUP BY a.article_id
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| article_not_found(id))
    }

    /// Add `inc_votes` to an article's vote count and return the updated article.
    pub async fn update_votes(
        &self,
        raw_id: &str,
        inc_votes: Option<&Value>,
    ) -> Result<Article, RepoError> {
        let id = parse_id("article_id", raw_id)?;
        let delta = VoteDelta::from_json(inc_votes)?;

        // Single query: CTE for the increment + subquery for the comment count
        sqlx::query_as::<_, Article>(
            r#"
            WITH updated AS (
                UPDATE articles
                SET votes = votes + $1
                WHERE article_id = $2
                RETURNING article_id, title, topic, author, body, created_at, votes
            )
            SELECT
                u.article_id,
                u.title,
                u.topic,
                u.author,
                u.body,
                u.created_at,
                u.votes,
                (SELECT COUNT(*) FROM comments c WHERE c.article_id = u.article_id) AS comment_count
            FROM updated u
            "#,
        )
        .bind(delta.get())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| article_not_found(id))
    }

    /// Fail with NotFound unless the article exists.
    pub async fn ensure_exists(&self, id: i32) -> Result<(), RepoError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        if exists {
            Ok(())
        } else {
            Err(article_not_found(id))
        }
    }
}

fn article_not_found(id: i32) -> RepoError {
    RepoError::NotFound(format!("No article found for article_id: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    use crate::models::ValidationError;

    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost/nc_news_unreachable")
            .expect("valid url")
    }

    #[test]
    fn not_found_message() {
        let err = article_not_found(30000000);
        assert_eq!(err.to_string(), "No article found for article_id: 30000000");
    }

    // Validation happens before any query, so these never touch the pool.

    #[tokio::test]
    async fn get_rejects_non_integer_id() {
        let pool = lazy_pool();
        let err = ArticleRepo::new(&pool).get("hello").await.unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::InvalidId { .. })
        ));
    }

    #[tokio::test]
    async fn update_votes_rejects_missing_delta() {
        let pool = lazy_pool();
        let err = ArticleRepo::new(&pool).update_votes("1", None).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(ValidationError::InvalidVotes)));
    }

    #[tokio::test]
    async fn list_rejects_numeric_topic() {
        let pool = lazy_pool();
        let query = ArticleQuery {
            topic: Some("42"),
            ..Default::default()
        };
        let err = ArticleRepo::new(&pool).list(query).await.unwrap_err();
        assert_eq!(err.to_string(), "Bad request: topic query should not be a number");
    }
}
