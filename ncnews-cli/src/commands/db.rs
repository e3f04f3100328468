//! Schema and seed commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ncnews_server::db::{schema, seed};
use ncnews_server::SeedData;

use super::DatabaseArgs;

/// Arguments for the setup command
#[derive(Parser, Debug)]
pub struct SetupArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Directory holding topics.json, users.json, articles.json and comments.json
    #[arg(long, short = 'd')]
    pub data: PathBuf,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create any missing tables
pub async fn run_setup(args: SetupArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    let mut conn = pool.acquire().await.context("Failed to acquire connection")?;

    schema::create(&mut conn).await.context("Failed to create schema")?;

    drop(conn);
    pool.close().await;
    Ok(())
}

/// Drop, recreate and load a data set
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let data = SeedData::from_dir(&args.data)
        .with_context(|| format!("Failed to load data set from {}", args.data.display()))?;

    let pool = args.db.connect().await?;
    seed::run(&pool, &data).await.context("Seeding failed")?;

    pool.close().await;
    Ok(())
}
