//! Route definitions for the Krishi Sevak backend

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Rule-based advisory
        .route("/recommend", post(handlers::recommend_crop))
        .route("/detect", post(handlers::detect_disease))
        .route("/fertilizer", post(handlers::recommend_fertilizer))
        .route("/chat", post(handlers::chat))
        // Live data with fallbacks
        .route("/weather", get(handlers::get_weather))
        .route("/mandi", get(handlers::get_mandi_prices))
}

/// Static site: index page, assets, PWA manifest and service worker
pub fn static_routes(static_dir: &str) -> Router<AppState> {
    let dir = Path::new(static_dir);

    Router::new()
        .route_service("/", ServeFile::new(dir.join("index.html")))
        .route_service("/manifest.json", ServeFile::new(dir.join("manifest.json")))
        .route_service("/service-worker.js", ServeFile::new(dir.join("service-worker.js")))
        .nest_service("/static", ServeDir::new(dir))
}
