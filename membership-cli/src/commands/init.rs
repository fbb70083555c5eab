//! Database initialization command

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use membership_server::{initialize, MembershipConfig, Store};

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// SQLite database file (default: membership.db)
    #[arg(long, env = "MEMBERSHIP_DB_PATH")]
    pub db_path: Option<PathBuf>,
}

pub async fn run_init(args: InitArgs) -> Result<()> {
    let db_path = args
        .db_path
        .unwrap_or_else(|| MembershipConfig::from_env().db_path);

    let store = Store::open(&db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
    initialize(&store)
        .await
        .context("Failed to initialize members database")?;

    println!("✅ Members database ready at {}", db_path.display());
    Ok(())
}
