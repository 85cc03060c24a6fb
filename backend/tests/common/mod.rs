//! Shared helpers for router-level tests

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use krishi_backend::{create_app, AppState, Config};
use tower::ServiceExt;

mod stub;

pub use stub::{spawn_stub, UNREACHABLE_URL};

/// Application wired to the given upstream URLs and the repository's static site
pub fn app(weather_url: &str, mandi_url: &str, mandi_key: Option<&str>) -> Router {
    let mut config = Config::default();
    config.weather.base_url = weather_url.to_string();
    config.weather.timeout_secs = 2;
    config.weather.probe_timeout_secs = 1;
    config.mandi.base_url = mandi_url.to_string();
    config.mandi.api_key = mandi_key.map(str::to_string);
    config.mandi.timeout_secs = 2;
    config.server.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../static").to_string();

    create_app(AppState::new(config).unwrap())
}

/// Application whose upstreams are all unreachable
pub fn offline_app() -> Router {
    app(UNREACHABLE_URL, UNREACHABLE_URL, None)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
