//! Member repository
//!
//! Plain parameterized statements over the `members` table. Existence checks
//! and the writes that follow them are separate statements.

use sqlx::sqlite::SqliteConnection;

use crate::db::DbError;
use crate::models::{Member, NewMember, ProfileUpdate};

const MEMBER_COLUMNS: &str = "id, username, email, password, phone, birthdate";

/// Member repository
pub struct MemberRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> MemberRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Whether any member already uses this username or this email.
    pub async fn username_or_email_exists(
        &mut self,
        username: &str,
        email: &str,
    ) -> Result<bool, DbError> {
        let row = sqlx::query("SELECT 1 FROM members WHERE username = ? OR email = ?")
            .bind(username)
            .bind(email)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.is_some())
    }

    /// Whether a member other than `id` uses this email.
    pub async fn email_taken_by_other(&mut self, email: &str, id: i64) -> Result<bool, DbError> {
        let row = sqlx::query("SELECT 1 FROM members WHERE email = ? AND id <> ?")
            .bind(email)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.is_some())
    }

    /// Insert a member, returning the generated id.
    pub async fn insert(&mut self, member: &NewMember) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO members (username, email, password, phone, birthdate) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&member.username)
        .bind(&member.email)
        .bind(&member.password)
        .bind(&member.phone)
        .bind(&member.birthdate)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Find the member whose email and password both match exactly.
    pub async fn find_by_credentials(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Option<Member>, DbError> {
        let sql = format!(
            "SELECT {} FROM members WHERE email = ? AND password = ?",
            MEMBER_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(email)
            .bind(password)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.as_ref().map(Member::from_row).transpose()?)
    }

    /// Find a member by id.
    pub async fn find(&mut self, id: i64) -> Result<Option<Member>, DbError> {
        let sql = format!("SELECT {} FROM members WHERE id = ?", MEMBER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.as_ref().map(Member::from_row).transpose()?)
    }

    /// Overwrite email, password, phone and birthdate. Returns rows affected.
    pub async fn update_profile(&mut self, id: i64, update: &ProfileUpdate) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE members SET email = ?, password = ?, phone = ?, birthdate = ? WHERE id = ?",
        )
        .bind(&update.email)
        .bind(&update.password)
        .bind(&update.phone)
        .bind(&update.birthdate)
        .bind(id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a member. Deleting an unknown id affects zero rows.
    pub async fn delete(&mut self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Total number of members.
    pub async fn count(&mut self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}
