//! Health and status handlers

use axum::{extract::State, Json};
use chrono::Local;
use serde::Serialize;

use crate::AppState;

/// Version reported by the health endpoint
pub const API_VERSION: &str = "2.0";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: API_VERSION.to_string(),
    })
}

/// Which advisory capabilities are backed by a model
#[derive(Serialize)]
pub struct ModelCapabilities {
    pub huggingface_model: bool,
    pub crop_recommendation_model: bool,
    pub chat_model: bool,
}

#[derive(Serialize)]
pub struct ApiStatus {
    pub weather: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub timestamp: String,
    pub models: ModelCapabilities,
    pub apis: ApiStatus,
}

/// Status endpoint handler; probes the weather provider on every call
pub async fn service_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let weather = if state.weather.is_available().await {
        "connected"
    } else {
        "disconnected"
    };

    Json(StatusResponse {
        status: "healthy".to_string(),
        timestamp: Local::now().to_rfc3339(),
        models: ModelCapabilities {
            huggingface_model: false,
            crop_recommendation_model: true,
            chat_model: false,
        },
        apis: ApiStatus {
            weather: weather.to_string(),
        },
    })
}
