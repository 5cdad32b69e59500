// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Shared fixtures for the HTTP API tests
//!
//! A 22-word, 4-dimensional vector table laid out so that
//! `king - man + woman` lands on `queen` and `prince` is the closest word to
//! `king`.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use word_vector_api::api::{create_app, AppState};
use word_vector_api::VectorModel;

pub const FIXTURE_VECTORS: &str = "\
king 0.9 0.8 0.1 0.0
queen 0.9 0.1 0.8 0.0
man 0.1 0.9 0.0 0.1
woman 0.1 0.1 0.9 0.1
prince 0.8 0.7 0.2 0.1
princess 0.8 0.2 0.7 0.1
apple 0.0 0.1 0.1 0.9
banana 0.1 0.0 0.1 0.9
cherry 0.0 0.2 0.2 0.8
grape 0.1 0.1 0.0 0.8
lemon 0.2 0.0 0.1 0.7
mango 0.1 0.2 0.1 0.9
orange 0.0 0.1 0.2 0.9
peach 0.2 0.1 0.2 0.8
pear 0.1 0.1 0.1 0.9
plum 0.0 0.0 0.2 0.9
car -0.5 0.3 0.3 0.1
bus -0.6 0.3 0.2 0.1
train -0.7 0.2 0.3 0.0
boat -0.4 0.1 0.4 0.2
plane -0.6 0.4 0.1 0.1
bike -0.5 0.2 0.2 0.3
";

pub const FIXTURE_VOCABULARY_SIZE: usize = 22;

pub fn fixture_model() -> Arc<VectorModel> {
    Arc::new(
        VectorModel::from_reader(Cursor::new(FIXTURE_VECTORS))
            .expect("fixture vectors should parse"),
    )
}

/// Test helper: app with a loaded model and default rate limits
pub fn app_with_model() -> Router {
    create_app(Arc::new(AppState::with_model(fixture_model())))
}

/// Test helper: app whose model is still loading
pub fn app_without_model() -> Router {
    create_app(Arc::new(AppState::new_for_test()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// GET request that appears to come from `addr`
pub fn get_from(uri: &str, addr: &str) -> Request<Body> {
    let addr: SocketAddr = addr.parse().unwrap();
    let mut request = get(uri);
    request
        .extensions_mut()
        .insert(axum::extract::ConnectInfo(addr));
    request
}

/// Sends one request and returns the status plus the body as JSON
pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
