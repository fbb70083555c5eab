//! HTTP server layer
//!
//! Axum server with:
//! - Form-encoded submissions, server-rendered pages
//! - Request tracing
//! - Graceful shutdown
//! - Error pages for every failure

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use server::{router, run_server, AppState, ServerConfig, ServerError};

#[cfg(test)]
pub(crate) mod testing {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use axum::response::Response;
    use axum::Router;
    use tower::ServiceExt;

    use crate::db::{initialize, Store};

    /// Router over a freshly initialized store in a temporary directory.
    pub async fn test_app() -> (tempfile::TempDir, Store, Router) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("members.db")).unwrap();
        initialize(&store).await.unwrap();
        let app = super::router(store.clone());
        (dir, store, app)
    }

    pub async fn get(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    pub fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}
