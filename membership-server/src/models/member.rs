//! Member record and form inputs
//!
//! Forms arrive URL-encoded. Every field defaults to an empty string so that a
//! missing required field is reported the same way as an empty one.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::ValidationError;

/// A row of the `members` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}

impl Member {
    /// Build a member from a `SELECT id, username, email, password, phone, birthdate` row.
    ///
    /// `phone` and `birthdate` are nullable columns and read as empty strings when NULL.
    pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            phone: row.try_get::<Option<String>, _>("phone")?.unwrap_or_default(),
            birthdate: row
                .try_get::<Option<String>, _>("birthdate")?
                .unwrap_or_default(),
        })
    }
}

/// Registration form (POST /register)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}

/// A member ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}

impl RegisterForm {
    /// Require username, email and password to be non-empty.
    pub fn validate(self) -> Result<NewMember, ValidationError> {
        if self.username.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::Required {
                fields: "username, email and password",
            });
        }

        Ok(NewMember {
            username: self.username,
            email: self.email,
            password: self.password,
            phone: self.phone,
            birthdate: self.birthdate,
        })
    }
}

/// Login form (POST /login)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Email and password pair matched against stored members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(self) -> Result<Credentials, ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::Required {
                fields: "email and password",
            });
        }

        Ok(Credentials {
            email: self.email,
            password: self.password,
        })
    }
}

/// Profile edit form (POST /edit_profile/{id}); username is not editable
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}

/// Replacement values for a member's mutable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}

impl ProfileForm {
    pub fn validate(self) -> Result<ProfileUpdate, ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::Required {
                fields: "email and password",
            });
        }

        Ok(ProfileUpdate {
            email: self.email,
            password: self.password,
            phone: self.phone,
            birthdate: self.birthdate,
        })
    }
}
