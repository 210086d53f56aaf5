//! Shared helpers for router integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use todo_core::db::{open_db_in_memory, seed_default_lists};
use todo_http::{build_router, AppState};

/// Router over a fresh in-memory database without rows.
pub fn empty_app() -> Router {
    build_router(AppState::new(open_db_in_memory().expect("db")))
}

/// Router over a fresh in-memory database holding lists 1 and 2.
pub fn seeded_app() -> Router {
    let mut conn = open_db_in_memory().expect("db");
    seed_default_lists(&mut conn).expect("seed");
    build_router(AppState::new(conn))
}

/// Decoded response: status, headers, JSON body (`Null` when empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .expect("location header")
            .to_str()
            .expect("ascii location")
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |text| Body::from(text.to_owned())))
        .expect("req");

    let response = app.clone().oneshot(request).await.expect("resp");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, "GET", uri, None).await
}
