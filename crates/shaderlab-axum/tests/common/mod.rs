//! Shared fixtures for shaderlab-axum integration tests.

#![allow(dead_code)]

pub mod ports;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use std::path::Path;
use tower::ServiceExt;

use shaderlab_axum::bootstrap::{ServerConfig, bootstrap};
use shaderlab_axum::routes::create_router;

/// Helper to create a config rooted at a temporary directory.
pub fn test_config(root: &Path) -> ServerConfig {
    ServerConfig {
        host: ports::TEST_HOST.to_string(),
        port: 0, // Not used by router tests
        root: root.to_path_buf(),
        max_port_attempts: None,
    }
}

/// Router backed by real filesystem storage under `root`.
pub fn test_app(root: &Path) -> Router {
    let ctx = bootstrap(&test_config(root)).expect("bootstrap should succeed on a temp dir");
    create_router(ctx)
}

/// Collected response parts.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "expected JSON body, got {:?}: {e}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Send one request through the router.
pub async fn send(app: Router, method: Method, uri: &str, body: impl Into<Body>) -> TestResponse {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post(app: Router, uri: &str, body: impl Into<Body>) -> TestResponse {
    send(app, Method::POST, uri, body).await
}
