//! Load a data set into a fresh schema
//!
//! A data set is a directory with `topics.json`, `users.json`,
//! `articles.json` and `comments.json`, each a JSON array. Articles and
//! comments get their ids in file order, so `comments.json` refers to
//! articles by their 1-based position in `articles.json`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sqlx::PgPool;

use super::schema;

#[derive(Debug, Clone, Deserialize)]
pub struct TopicSeed {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSeed {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSeed {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentSeed {
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: i32,
}

/// Everything needed to populate an empty database.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub topics: Vec<TopicSeed>,
    pub users: Vec<UserSeed>,
    pub articles: Vec<ArticleSeed>,
    pub comments: Vec<CommentSeed>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl SeedData {
    /// Read a data set directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, SeedError> {
        let dir = dir.as_ref();
        Ok(Self {
            topics: read_json(&dir.join("topics.json"))?,
            users: read_json(&dir.join("users.json"))?,
            articles: read_json(&dir.join("articles.json"))?,
            comments: read_json(&dir.join("comments.json"))?,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeedError::Json {
        path: path.to_owned(),
        source,
    })
}

/// Drop and recreate the schema, then insert `data`.
///
/// Runs in one transaction: on failure the previous contents are untouched.
pub async fn run(pool: &PgPool, data: &SeedData) -> Result<(), SeedError> {
    let mut tx = pool.begin().await?;

    schema::drop(&mut *tx).await?;
    schema::create(&mut *tx).await?;

    for topic in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(&topic.slug)
            .bind(&topic.description)
            .execute(&mut *tx)
            .await?;
    }

    for user in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.avatar_url)
            .execute(&mut *tx)
            .await?;
    }

    for article in &data.articles {
        sqlx::query(
            r#"
            INSERT INTO articles (title, topic, author, body, created_at, votes)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&article.title)
        .bind(&article.topic)
        .bind(&article.author)
        .bind(&article.body)
        .bind(article.created_at)
        .bind(article.votes)
        .execute(&mut *tx)
        .await?;
    }

    for comment in &data.comments {
        sqlx::query(
            r#"
            INSERT INTO comments (article_id, author, body, created_at, votes)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.article_id)
        .bind(&comment.author)
        .bind(&comment.body)
        .bind(comment.created_at)
        .bind(comment.votes)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "Seed complete"
    );
    Ok(())
}
