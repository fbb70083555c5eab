//! Request error types with IntoResponse
//!
//! Every failure renders the error page. Domain failures (validation,
//! conflict, bad credentials, unknown member) keep status 200 and carry a
//! human-readable message; storage and rendering failures are logged and
//! answered with status 500.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::DbError;
use crate::models::ValidationError;
use crate::views;

pub const REGISTER_CONFLICT: &str = "username or email already exists";
pub const EMAIL_CONFLICT: &str = "email is already in use";
const AUTH_FAILED: &str = "incorrect email or password";
const MEMBER_NOT_FOUND: &str = "member not found";
const INTERNAL: &str = "an internal error occurred";

/// Request error type
#[derive(Debug)]
pub enum AppError {
    /// A required form field was empty
    Validation(ValidationError),

    /// Username or email already belongs to another member
    Conflict { message: &'static str },

    /// No member matches the submitted email and password
    Auth,

    /// No member with the requested id
    NotFound,

    /// Storage failure (500, logged)
    Database(DbError),

    /// Template failure (500, logged)
    Render(minijinja::Error),
}

impl AppError {
    pub fn conflict(message: &'static str) -> Self {
        Self::Conflict { message }
    }

    /// Map a failed write, treating a UNIQUE violation as a conflict.
    ///
    /// Covers concurrent requests that both passed the existence pre-check.
    pub fn from_write(err: DbError, message: &'static str) -> Self {
        if err.is_unique_violation() {
            Self::conflict(message)
        } else {
            Self::Database(err)
        }
    }

    /// Message shown on the error page
    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Conflict { message } => (*message).to_owned(),
            Self::Auth => AUTH_FAILED.to_owned(),
            Self::NotFound => MEMBER_NOT_FOUND.to_owned(),
            Self::Database(_) | Self::Render(_) => INTERNAL.to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Render(e) => {
                tracing::error!("Template error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            other => {
                tracing::debug!(reason = %other.message(), "Request rejected");
                StatusCode::OK
            }
        };

        let message = self.message();
        match views::error(&message) {
            Ok(page) => (status, Html(page)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for AppError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<minijinja::Error> for AppError {
    fn from(e: minijinja::Error) -> Self {
        Self::Render(e)
    }
}
