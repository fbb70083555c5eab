//! Member endpoints - welcome page, profile editing, deletion
//!
//! Pages are keyed by member id in the path. Anyone who knows an id can reach
//! them; there is no session check.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};

use crate::db::MemberRepo;
use crate::http::error::{AppError, EMAIL_CONFLICT};
use crate::http::extractors::MemberId;
use crate::http::server::AppState;
use crate::models::ProfileForm;
use crate::views;

/// GET /welcome/{id} - show a member's profile
async fn welcome(
    State(state): State<Arc<AppState>>,
    MemberId(id): MemberId,
) -> Result<Html<String>, AppError> {
    let mut conn = state.store.connect().await?;
    let member = MemberRepo::new(&mut conn)
        .find(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Html(views::welcome(&member)?))
}

/// GET /edit_profile/{id} - profile form prefilled with current values
async fn show_edit_profile(
    State(state): State<Arc<AppState>>,
    MemberId(id): MemberId,
) -> Result<Html<String>, AppError> {
    let mut conn = state.store.connect().await?;
    let member = MemberRepo::new(&mut conn)
        .find(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Html(views::edit_profile(&member)?))
}

/// POST /edit_profile/{id} - replace email, password, phone and birthdate
async fn submit_edit_profile(
    State(state): State<Arc<AppState>>,
    MemberId(id): MemberId,
    Form(form): Form<ProfileForm>,
) -> Result<Redirect, AppError> {
    let update = form.validate()?;

    let mut conn = state.store.connect().await?;
    let mut repo = MemberRepo::new(&mut conn);

    if repo.email_taken_by_other(&update.email, id).await? {
        return Err(AppError::conflict(EMAIL_CONFLICT));
    }

    let updated = repo
        .update_profile(id, &update)
        .await
        .map_err(|e| AppError::from_write(e, EMAIL_CONFLICT))?;

    if updated == 0 {
        tracing::debug!(member_id = id, "Profile update matched no member");
    } else {
        tracing::info!(member_id = id, "Member profile updated");
    }

    Ok(Redirect::to(&format!("/welcome/{}", id)))
}

/// GET /delete/{id} - remove a member, then go home
async fn delete_member(
    State(state): State<Arc<AppState>>,
    MemberId(id): MemberId,
) -> Result<Redirect, AppError> {
    let mut conn = state.store.connect().await?;
    let deleted = MemberRepo::new(&mut conn).delete(id).await?;

    if deleted > 0 {
        tracing::info!(member_id = id, "Member deleted");
    }

    Ok(Redirect::to("/"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/welcome/{id}", get(welcome))
        .route(
            "/edit_profile/{id}",
            get(show_edit_profile).post(submit_edit_profile),
        )
        .route("/delete/{id}", get(delete_member))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::db::{MemberRepo, Store};
    use crate::http::testing::{body_text, get, location, post_form, test_app};
    use crate::models::{Member, NewMember};

    async fn add_member(store: &Store, username: &str, email: &str) -> i64 {
        let mut conn = store.connect().await.unwrap();
        MemberRepo::new(&mut conn)
            .insert(&NewMember {
                username: username.into(),
                email: email.into(),
                password: "pw1".into(),
                phone: "0911".into(),
                birthdate: "2000-01-01".into(),
            })
            .await
            .unwrap()
    }

    async fn load(store: &Store, id: i64) -> Option<Member> {
        let mut conn = store.connect().await.unwrap();
        MemberRepo::new(&mut conn).find(id).await.unwrap()
    }

    #[tokio::test]
    async fn welcome_shows_member() {
        let (_dir, store, app) = test_app().await;
        let id = add_member(&store, "bob", "bob@x.com").await;

        let response = get(&app, &format!("/welcome/{}", id)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("★bob★!"));
        assert!(body.contains("bob@x.com"));
        assert!(body.contains("2000-01-01"));
    }

    #[tokio::test]
    async fn welcome_unknown_or_malformed_id_is_not_found() {
        let (_dir, _store, app) = test_app().await;

        for uri in ["/welcome/999", "/welcome/abc"] {
            let response = get(&app, uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert!(body_text(response).await.contains("member not found"));
        }
    }

    #[tokio::test]
    async fn edit_form_shows_current_values() {
        let (_dir, store, app) = test_app().await;
        let id = add_member(&store, "bob", "bob@x.com").await;

        let body = body_text(get(&app, &format!("/edit_profile/{}", id)).await).await;
        assert!(body.contains("value=\"bob@x.com\""));
        assert!(body.contains("value=\"0911\""));

        let body = body_text(get(&app, "/edit_profile/999").await).await;
        assert!(body.contains("member not found"));
    }

    #[tokio::test]
    async fn edit_updates_mutable_fields_only() {
        let (_dir, store, app) = test_app().await;
        let id = add_member(&store, "bob", "bob@x.com").await;

        let response = post_form(
            &app,
            &format!("/edit_profile/{}", id),
            "email=robert%40x.com&password=pw2&phone=&birthdate=1999-09-09",
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/welcome/{}", id));

        let member = load(&store, id).await.unwrap();
        assert_eq!(member.id, id);
        assert_eq!(member.username, "bob");
        assert_eq!(member.email, "robert@x.com");
        assert_eq!(member.password, "pw2");
        assert_eq!(member.phone, "");
        assert_eq!(member.birthdate, "1999-09-09");
    }

    #[tokio::test]
    async fn edit_keeping_own_email_is_allowed() {
        let (_dir, store, app) = test_app().await;
        let id = add_member(&store, "bob", "bob@x.com").await;

        let response = post_form(
            &app,
            &format!("/edit_profile/{}", id),
            "email=bob%40x.com&password=pw9",
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(load(&store, id).await.unwrap().password, "pw9");
    }

    #[tokio::test]
    async fn edit_with_someone_elses_email_conflicts() {
        let (_dir, store, app) = test_app().await;
        let id = add_member(&store, "bob", "bob@x.com").await;
        let before = load(&store, id).await;

        let response = post_form(
            &app,
            &format!("/edit_profile/{}", id),
            "email=admin%40example.com&password=pw2",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("email is already in use"));
        assert_eq!(load(&store, id).await, before);
    }

    #[tokio::test]
    async fn edit_with_empty_password_is_rejected() {
        let (_dir, store, app) = test_app().await;
        let id = add_member(&store, "bob", "bob@x.com").await;

        let response = post_form(
            &app,
            &format!("/edit_profile/{}", id),
            "email=bob%40x.com&password=",
        )
        .await;

        assert!(body_text(response).await.contains("please enter email and password"));
        assert_eq!(load(&store, id).await.unwrap().password, "pw1");
    }

    #[tokio::test]
    async fn delete_removes_member_and_tolerates_unknown_ids() {
        let (_dir, store, app) = test_app().await;
        let id = add_member(&store, "bob", "bob@x.com").await;

        let response = get(&app, &format!("/delete/{}", id)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert!(load(&store, id).await.is_none());

        let response = get(&app, &format!("/delete/{}", id)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let body = body_text(get(&app, &format!("/welcome/{}", id)).await).await;
        assert!(body.contains("member not found"));
    }
}
