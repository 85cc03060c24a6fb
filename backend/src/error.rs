//! Error handling for the Krishi Sevak backend
//!
//! Upstream failures are split in two: transport failures are absorbed by the
//! services into fallback payloads, payload failures reach the client as 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // External service errors
    #[error("Upstream transport error: {0}")]
    UpstreamTransport(String),

    #[error("Upstream payload error from {service}: {detail}")]
    UpstreamPayload {
        service: &'static str,
        detail: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Reference data error: {0}")]
    ReferenceData(#[from] shared::ReferenceError),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for failures that should be answered with fallback data
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::UpstreamTransport(_))
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UpstreamTransport(_) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_UNAVAILABLE",
                "Upstream service is unavailable".to_string(),
            ),
            AppError::UpstreamPayload { service, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_PAYLOAD_ERROR",
                format!("Failed to process {} data", service),
            ),
            AppError::Configuration(_) | AppError::ReferenceData(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "Service is misconfigured".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
