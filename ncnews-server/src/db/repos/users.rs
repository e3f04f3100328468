//! User repository

use sqlx::{FromRow, PgPool};

use super::RepoError;

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All users, ordered by username.
    pub async fn list(&self) -> Result<Vec<User>, RepoError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT username, name, avatar_url FROM users ORDER BY username",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(users)
    }
}
