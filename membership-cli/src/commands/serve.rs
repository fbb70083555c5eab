//! HTTP server command
//!
//! Initializes the members database, then serves until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use membership_server::{initialize, run_server, MembershipConfig, ServerConfig, Store};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "MEMBERSHIP_BIND")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file (default: membership.db)
    #[arg(long, env = "MEMBERSHIP_DB_PATH")]
    pub db_path: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let defaults = MembershipConfig::from_env();
    let db_path = args.db_path.unwrap_or(defaults.db_path);
    let bind_addr = args.bind.unwrap_or(defaults.bind_addr);

    tracing::info!("Opening database at {}", db_path.display());
    let store = Store::open(&db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    initialize(&store)
        .await
        .context("Failed to initialize members database")?;

    // Run server (blocks until shutdown)
    run_server(store, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    Ok(())
}
