//! Login endpoints
//!
//! A successful login only redirects; no session or token is issued.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};

use crate::db::MemberRepo;
use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::models::LoginForm;
use crate::views;

/// GET /login - login form
async fn show_login() -> Result<Html<String>, AppError> {
    Ok(Html(views::login()?))
}

/// POST /login - match email and password, then redirect to the welcome page
async fn submit_login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let credentials = form.validate()?;

    let mut conn = state.store.connect().await?;
    let member = MemberRepo::new(&mut conn)
        .find_by_credentials(&credentials.email, &credentials.password)
        .await?
        .ok_or(AppError::Auth)?;

    tracing::debug!(member_id = member.id, "Member logged in");
    Ok(Redirect::to(&format!("/welcome/{}", member.id)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", get(show_login).post(submit_login))
}
