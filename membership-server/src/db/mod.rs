//! Database layer - SQLite store, schema and repositories
//!
//! - One connection per request, opened from the store's connect options
//! - Parameterized queries only
//! - Uniqueness is pre-checked in handlers and enforced again by the schema

pub mod migrations;
pub mod repos;
pub mod seed;
pub mod store;

pub use repos::*;
pub use store::{DbError, Store};

/// Prepare the store for serving: create the members table and seed the
/// default administrator.
///
/// Called once by the process entry point before the server starts. Safe to
/// call again; both steps are idempotent.
pub async fn initialize(store: &Store) -> Result<(), DbError> {
    let mut conn = store.connect().await?;

    migrations::run(&mut conn).await?;
    if seed::seed_admin(&mut conn).await? {
        tracing::info!(username = seed::ADMIN_USERNAME, "Seeded default administrator");
    }

    Ok(())
}
