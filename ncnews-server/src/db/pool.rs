//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and timeouts. A store
//! call that cannot get a connection, or whose statement runs too long,
//! fails instead of blocking the request.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default limit for acquiring a connection and for each statement.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a PostgreSQL connection pool with default limits.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/nc_news").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_TIMEOUT).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
/// * `timeout` - Applied both to pool acquisition and as the server-side
///   `statement_timeout` of every connection
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(database_url, timeout)?;

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(timeout)
        .connect_with(options)
        .await
}

fn connect_options(database_url: &str, timeout: Duration) -> Result<PgConnectOptions, sqlx::Error> {
    let options: PgConnectOptions = database_url.parse()?;
    Ok(options.options([("statement_timeout", timeout.as_millis().to_string())]))
}
