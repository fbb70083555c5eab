//! SQLite store handle
//!
//! Holds connect options only. Each caller opens its own connection and drops
//! it when done; nothing is pooled or shared between requests.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DbError {
    /// True when a UNIQUE constraint rejected the statement.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.is_unique_violation(),
            _ => false,
        }
    }
}

/// Handle to the members database file
#[derive(Debug, Clone)]
pub struct Store {
    options: SqliteConnectOptions,
    path: PathBuf,
}

impl Store {
    /// Point the store at a database file, creating its parent directory.
    ///
    /// The file itself is created on first connect.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DbError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        Ok(Self { options, path })
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection for one unit of work.
    pub async fn connect(&self) -> Result<SqliteConnection, DbError> {
        let conn = SqliteConnection::connect_with(&self.options).await?;
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_creates_missing_file_and_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("members.db");

        let store = Store::open(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());

        let conn = store.connect().await.unwrap();
        conn.close().await.unwrap();
        assert!(path.exists());
    }

    #[test]
    fn io_error_is_not_unique_violation() {
        let err = DbError::Io(std::io::Error::other("disk"));
        assert!(!err.is_unique_violation());
    }
}
