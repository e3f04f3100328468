//! Comment repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{parse_id, NewComment};
use super::{ArticleRepo, RepoError};

/// Comment record from database
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Comments for an article, oldest first. Empty if the article has none;
    /// NotFound if the article does not exist.
    pub async fn list_for_article(&self, raw_article_id: &str) -> Result<Vec<Comment>, RepoError> {
        let article_id = parse_id("article_id", raw_article_id)?;
        ArticleRepo::new(self.pool).ensure_exists(article_id).await?;

        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT comment_id, article_id, author, body, votes, created_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at ASC, comment_id ASC
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    /// Add a comment to an article.
    ///
    /// The author is not pre-checked; an unknown username fails on the
    /// foreign key and surfaces as a bad request.
    pub async fn create(
        &self,
        raw_article_id: &str,
        username: Option<&str>,
        body: Option<&str>,
    ) -> Result<Comment, RepoError> {
        let article_id = parse_id("article_id", raw_article_id)?;
        let comment = NewComment::new(username, body)?;
        ArticleRepo::new(self.pool).ensure_exists(article_id).await?;

        let created = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (article_id, author, body)
            VALUES ($1, $2, $3)
            RETURNING comment_id, article_id, author, body, votes, created_at
            "#,
        )
        .bind(article_id)
        .bind(comment.author())
        .bind(comment.body())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(comment_id = created.comment_id, article_id, "Comment created");
        Ok(created)
    }

    /// Delete a comment by its path id.
    pub async fn delete(&self, raw_comment_id: &str) -> Result<(), RepoError> {
        let comment_id = parse_id("comment_id", raw_comment_id)?;

        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!(
                "No comment found for comment_id: {}",
                comment_id
            )));
        }

        tracing::debug!(comment_id, "Comment deleted");
        Ok(())
    }
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

    #[tokio::test]
    async fn create_validates_username_before_body() {
        let pool = lazy_pool();
        let err = CommentRepo::new(&pool).create("1", None, None).await.unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::MissingField { field: "username" })
        ));
    }

    #[tokio::test]
    async fn create_rejects_blank_body() {
        let pool = lazy_pool();
        let err = CommentRepo::new(&pool)
            .create("1", Some("butter_bridge"), Some(""))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad request: Invalid input in body");
    }

    #[tokio::test]
    async fn delete_rejects_non_integer_id() {
        let pool = lazy_pool();
        let err = CommentRepo::new(&pool).delete("first").await.unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::InvalidId { field: "comment_id", .. })
        ));
    }
}
