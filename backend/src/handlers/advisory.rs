//! HTTP handlers for rule-based advisory endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::{rules, ChatReply, CropRecommendation, DiseaseReport, FertilizerAdvice};

use crate::extract::{lenient_string, LenientJson};
use crate::AppState;

/// Input for crop recommendation
#[derive(Debug, Default, Deserialize)]
pub struct RecommendInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub soil: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub season: String,
}

/// Recommend a crop for a soil type and season
pub async fn recommend_crop(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<RecommendInput>,
) -> Json<CropRecommendation> {
    tracing::info!(soil = %input.soil, season = %input.season, "Crop recommendation requested");
    Json(rules::recommend(&state.reference, &input.soil, &input.season))
}

/// Detect crop disease from an uploaded image. The body is not inspected.
pub async fn detect_disease() -> Json<DiseaseReport> {
    Json(DiseaseReport::stub())
}

/// Input for fertilizer recommendation
#[derive(Debug, Default, Deserialize)]
pub struct FertilizerInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub crop: String,
}

/// Recommend a fertilizer schedule for a crop
pub async fn recommend_fertilizer(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<FertilizerInput>,
) -> Json<FertilizerAdvice> {
    Json(rules::fertilizer_for(&state.reference, &input.crop))
}

/// Input for the chat assistant
#[derive(Debug, Default, Deserialize)]
pub struct ChatInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

/// Reply to a chat message
pub async fn chat(LenientJson(input): LenientJson<ChatInput>) -> Json<ChatReply> {
    Json(rules::reply_for(&input.message))
}
