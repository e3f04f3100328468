//! HTTP server command for the NC News API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use ncnews_server::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "NCNEWS_BIND", default_value = "127.0.0.1:9090")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting NC News API on {}", args.bind);

    let pool = args.db.connect().await?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
