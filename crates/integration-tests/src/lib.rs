//! Integration tests for Tavola.
//!
//! The menu app has no external services, so the tests drive the full
//! router in-process with `tower::ServiceExt::oneshot` instead of a
//! running server. Each test builds its own app; cart state is shared
//! across requests against the same app, exactly as it is shared
//! across requests to one running process.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tavola-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use tavola_menu::config::MenuConfig;
use tavola_menu::routes;
use tavola_menu::state::AppState;

/// Build the full router with a fresh state: the sample catalog and an
/// empty cart.
#[must_use]
pub fn test_app() -> Router {
    routes::routes().with_state(AppState::new(MenuConfig::default()))
}

/// Send a GET request to the app.
///
/// # Panics
///
/// Panics if the request cannot be built or the app fails to respond.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    app.clone()
        .oneshot(request)
        .await
        .expect("app failed to respond")
}

/// Send a urlencoded form POST to the app.
///
/// # Panics
///
/// Panics if the request cannot be built or the app fails to respond.
pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .expect("failed to build request");
    app.clone()
        .oneshot(request)
        .await
        .expect("app failed to respond")
}

/// Collect a response body as text.
///
/// # Panics
///
/// Panics if the body cannot be collected or is not UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to collect body");
    String::from_utf8(bytes.to_vec()).expect("body is not valid UTF-8")
}
