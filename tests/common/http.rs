//! Router and request helpers
//!
//! Requests are driven through the router in-process with
//! `tower::ServiceExt::oneshot`; no socket is opened.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use msgboard::backend::routes::create_router;
use msgboard::backend::server::AppState;
use msgboard::backend::store::BoardStore;
use tower::ServiceExt;

/// Build the full application router around `store`
pub fn test_router(store: Arc<dyn BoardStore>) -> Router {
    let state = AppState::new(store).expect("page template should compile");
    create_router(state)
}

pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router
        .clone()
        .oneshot(request)
        .await
        .expect("router should not fail")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// A url-encoded form POST. Values are used verbatim, so keep them to
/// characters that need no escaping.
pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("valid request")
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
