//! Topic repository

use sqlx::{FromRow, PgPool};

use super::RepoError;

/// Topic record from database
#[derive(Debug, Clone, FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

/// Topic repository
pub struct TopicRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TopicRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All topics, ordered by slug.
    pub async fn list(&self) -> Result<Vec<Topic>, RepoError> {
        let topics =
            sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics ORDER BY slug")
                .fetch_all(self.pool)
                .await?;
        Ok(topics)
    }

    pub async fn exists(&self, slug: &str) -> Result<bool, RepoError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM topics WHERE slug = $1)")
                .bind(slug)
                .fetch_one(self.pool)
                .await?;
        Ok(exists)
    }
}
