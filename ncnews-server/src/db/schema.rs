//! Table definitions for topics, users, articles and comments

use sqlx::PgConnection;

const CREATE: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS topics (
        slug VARCHAR PRIMARY KEY,
        description VARCHAR NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        username VARCHAR PRIMARY KEY,
        name VARCHAR NOT NULL,
        avatar_url VARCHAR NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS articles (
        article_id SERIAL PRIMARY KEY,
        title VARCHAR NOT NULL,
        topic VARCHAR NOT NULL REFERENCES topics(slug),
        author VARCHAR NOT NULL REFERENCES users(username),
        body VARCHAR NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        votes INT NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS comments (
        comment_id SERIAL PRIMARY KEY,
        article_id INT NOT NULL REFERENCES articles(article_id) ON DELETE CASCADE,
        author VARCHAR NOT NULL REFERENCES users(username),
        body VARCHAR NOT NULL,
        votes INT NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

// Children first
const DROP: [&str; 4] = [
    "DROP TABLE IF EXISTS comments",
    "DROP TABLE IF EXISTS articles",
    "DROP TABLE IF EXISTS users",
    "DROP TABLE IF EXISTS topics",
];

/// Create all tables that do not exist yet.
pub async fn create(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    tracing::info!("Creating schema");
    for statement in CREATE {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Drop all tables.
pub async fn drop(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    tracing::info!("Dropping schema");
    for statement in DROP {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}
