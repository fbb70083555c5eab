//! Registration endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};

use crate::db::MemberRepo;
use crate::http::error::{AppError, REGISTER_CONFLICT};
use crate::http::server::AppState;
use crate::models::RegisterForm;
use crate::views;

/// GET /register - registration form
async fn show_register() -> Result<Html<String>, AppError> {
    Ok(Html(views::register()?))
}

/// POST /register - create a member, then send them to the login page
async fn submit_register(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, AppError> {
    let member = form.validate()?;

    let mut conn = state.store.connect().await?;
    let mut repo = MemberRepo::new(&mut conn);

    if repo
        .username_or_email_exists(&member.username, &member.email)
        .await?
    {
        return Err(AppError::conflict(REGISTER_CONFLICT));
    }

    let id = repo
        .insert(&member)
        .await
        .map_err(|e| AppError::from_write(e, REGISTER_CONFLICT))?;

    tracing::info!(member_id = id, username = %member.username, "Member registered");
    Ok(Redirect::to("/login"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/register", get(show_register).post(submit_register))
}
