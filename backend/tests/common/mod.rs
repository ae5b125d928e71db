//! Helpers shared by the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use agrisat_backend::{
    create_app,
    random::{RandomSource, SequenceRng, ThreadRng},
    AppState, Config,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt;

pub fn app_with(rng: Arc<dyn RandomSource>) -> Router {
    create_app(AppState::new(Config::default(), rng))
}

/// Router drawing from the real thread RNG
pub fn app() -> Router {
    app_with(Arc::new(ThreadRng))
}

/// Router whose every draw lands at `unit` within its range
pub fn constant_app(unit: f64) -> Router {
    app_with(Arc::new(SequenceRng::constant(unit)))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
