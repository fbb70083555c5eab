//! Database migrations for the members table

use sqlx::sqlite::SqliteConnection;

use super::DbError;

/// Create the members table if it does not exist
pub async fn run(conn: &mut SqliteConnection) -> Result<(), DbError> {
    tracing::debug!("Running members migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            username  TEXT    NOT NULL UNIQUE,
            email     TEXT    NOT NULL UNIQUE,
            password  TEXT    NOT NULL,
            phone     TEXT,
            birthdate TEXT
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}
