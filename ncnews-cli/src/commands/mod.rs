//! Command implementations for the ncnews CLI

pub mod db;
pub mod serve;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use ncnews_server::create_pool_with_options;
use ncnews_server::db::PgPool;

// Re-export main dispatcher functions for flat access from main.rs
pub use db::{run_seed, run_setup};
pub use serve::run_serve;

/// Database connection options shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "NCNEWS_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Seconds to wait for a connection or a single statement
    #[arg(long, env = "NCNEWS_DB_TIMEOUT_SECS", default_value_t = 5)]
    pub db_timeout_secs: u64,
}

impl DatabaseArgs {
    pub async fn connect(&self) -> Result<PgPool> {
        create_pool_with_options(
            &self.database_url,
            self.max_connections,
            Duration::from_secs(self.db_timeout_secs),
        )
        .await
        .context("Failed to create database pool")
    }
}
