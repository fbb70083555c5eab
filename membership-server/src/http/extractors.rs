//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::AppError;

/// Member id from the last path segment.
///
/// Anything that is not an integer cannot name a member, so it is reported as
/// an unknown member rather than a bad request.
pub struct MemberId(pub i64);

impl<S> FromRequestParts<S> for MemberId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        raw.parse::<i64>().map(Self).map_err(|_| AppError::NotFound)
    }
}
