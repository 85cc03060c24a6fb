//! Krishi Sevak - Backend Server
//!
//! Agricultural advisory API: rule-based crop and fertilizer recommendations,
//! weather and mandi prices from public APIs with static fallbacks.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::ReferenceData;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod services;

#[cfg(test)]
#[path = "../tests/common/stub.rs"]
pub(crate) mod test_support;

pub use config::Config;

use error::AppResult;
use external::{MandiClient, WeatherClient};
use services::{MandiService, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub reference: Arc<ReferenceData>,
    pub weather: WeatherService,
    pub mandi: MandiService,
}

impl AppState {
    /// Load reference data and build the upstream clients
    pub fn new(config: Config) -> AppResult<Self> {
        let reference = Arc::new(ReferenceData::load()?);
        let weather = WeatherService::new(WeatherClient::new(&config.weather)?, reference.clone());
        let mandi = MandiService::new(MandiClient::new(&config.mandi)?);

        Ok(Self {
            config: Arc::new(config),
            reference,
            weather,
            mandi,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::service_status))
        .nest("/api", routes::api_routes())
        .merge(routes::static_routes(&state.config.server.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
