//! Static pages

use std::sync::Arc;

use axum::{response::Html, routing::get, Router};

use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::views;

/// GET / - home page
async fn index() -> Result<Html<String>, AppError> {
    Ok(Html(views::index()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
