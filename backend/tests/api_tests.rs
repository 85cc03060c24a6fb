//! End-to-end tests for the advisory endpoints
//! Requests go through the full router, including extractors and layers

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use common::{get, offline_app, post_json};
use tower::ServiceExt;

// =============================================================================
// Crop recommendation
// =============================================================================

mod recommend {
    use super::*;

    #[tokio::test]
    async fn black_cotton_soil_in_kharif() {
        let (status, json) = post_json(
            offline_app(),
            "/api/recommend",
            r#"{"soil":"Black cotton soil","season":"Kharif"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["crop"], "cotton");
        assert_eq!(json["confidence"], 0.85);
        assert_eq!(
            json["details"],
            serde_json::json!({
                "season": "kharif",
                "best_state": "Gujarat",
                "water": "600-1000mm",
                "temperature": "25-35°C"
            })
        );
    }

    #[tokio::test]
    async fn missing_fields_use_defaults() {
        let (status, json) = post_json(offline_app(), "/api/recommend", "{}").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["crop"], "brinjal");
    }

    #[tokio::test]
    async fn malformed_body_is_not_rejected() {
        let (status, json) = post_json(offline_app(), "/api/recommend", "soil=clay").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["crop"], "brinjal");
    }
}

// =============================================================================
// Fertilizer, disease detection and chat
// =============================================================================

mod advisory {
    use super::*;

    #[tokio::test]
    async fn fertilizer_ignores_case() {
        let (_, upper) = post_json(offline_app(), "/api/fertilizer", r#"{"crop":"Wheat"}"#).await;
        let (_, lower) = post_json(offline_app(), "/api/fertilizer", r#"{"crop":"wheat"}"#).await;

        assert_eq!(upper, lower);
        assert_eq!(
            upper["recommendation"],
            "Apply 120:60:40 NPK kg/ha with 2/3 N as basal and 1/3 at tillering"
        );
        assert_eq!(
            upper["method"],
            "Split application recommended for optimal nutrient uptake and reduced losses"
        );
    }

    #[tokio::test]
    async fn fertilizer_unknown_crop() {
        let (status, json) =
            post_json(offline_app(), "/api/fertilizer", r#"{"crop":"kiwi"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["recommendation"], "Standard NPK 100:50:50 kg/ha");
    }

    #[tokio::test]
    async fn detect_returns_stub() {
        let (status, json) = post_json(offline_app(), "/api/detect", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "disease": "Rust",
                "confidence": 0.78,
                "solution": "Apply fungicide treatment",
                "severity": "medium"
            })
        );
    }

    #[tokio::test]
    async fn chat_replies() {
        let (_, weather) =
            post_json(offline_app(), "/api/chat", r#"{"message":"Weather in Pune?"}"#).await;
        assert_eq!(
            weather["reply"],
            "I can provide weather for Agra, Delhi, Mumbai, and more. Use the weather tab!"
        );

        let (_, other) = post_json(offline_app(), "/api/chat", r#"{"message":"hello"}"#).await;
        assert_eq!(other["reply"], "How can I help with farming today?");
    }
}

// =============================================================================
// Health, status and static site
// =============================================================================

mod service {
    use super::*;

    #[tokio::test]
    async fn health() {
        let (status, json) = get(offline_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "status": "healthy", "version": "2.0" }));
    }

    #[tokio::test]
    async fn status_reports_disconnected_weather() {
        let (status, json) = get(offline_app(), "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["apis"]["weather"], "disconnected");
        assert_eq!(json["models"]["crop_recommendation_model"], true);
        assert_eq!(json["models"]["huggingface_model"], false);
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn index_page_is_served() {
        let response = offline_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Krishi Sevak"));
    }

    #[tokio::test]
    async fn manifest_is_served() {
        let (status, json) = get(offline_app(), "/manifest.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["short_name"], "Krishi Sevak");
    }

    #[tokio::test]
    async fn missing_static_file_is_not_found() {
        let response = offline_app()
            .oneshot(
                Request::builder()
                    .uri("/static/does-not-exist.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
