//! ncnews CLI - runs and provisions the NC News API
//!
//! - `serve`: HTTP API over a Postgres database
//! - `setup`: create the schema
//! - `seed`: drop, recreate and load a JSON data set

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "ncnews",
    author,
    version,
    about = "News and discussion REST API: topics, articles, comments and users"
)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve(commands::serve::ServeArgs),
    /// Create any missing tables
    Setup(commands::db::SetupArgs),
    /// Drop, recreate and load a data set
    Seed(commands::db::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Values from a local .env file, if any, feed clap's env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Setup(args) => commands::run_setup(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }

    Ok(())
}
