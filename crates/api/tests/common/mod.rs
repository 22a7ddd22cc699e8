#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use printdesk_api::config::ServerConfig;
use printdesk_api::router::build_app_router;
use printdesk_api::state::AppState;
use printdesk_core::library::LocalFileLibrary;
use printdesk_core::store::MemoryJobStore;
use printdesk_core::workflow::JobWorkflow;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(library_root: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        library_root: library_root.to_path_buf(),
        max_upload_bytes: 1024 * 1024,
    }
}

/// A router over an in-memory job store and a temporary file library.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub library_dir: TempDir,
}

pub fn build_test_app() -> TestApp {
    let library_dir = tempfile::tempdir().unwrap();
    let config = test_config(library_dir.path());

    let workflow = JobWorkflow::new(
        Arc::new(MemoryJobStore::new()),
        Arc::new(LocalFileLibrary::new(library_dir.path())),
    );
    let state = AppState { workflow };

    TestApp {
        router: build_app_router(state, &config),
        library_dir,
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body).await
}

pub async fn put_bytes(app: &Router, uri: &str, body: &'static [u8]) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/octet-stream")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn json_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
