//! Advisory response models: fertilizer, disease detection and chat

use serde::{Deserialize, Serialize};

/// Application method shown with every fertilizer recommendation
pub const FERTILIZER_METHOD: &str =
    "Split application recommended for optimal nutrient uptake and reduced losses";

/// Fertilizer recommendation returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FertilizerAdvice {
    pub recommendation: String,
    pub method: String,
}

impl FertilizerAdvice {
    pub fn new(recommendation: impl Into<String>) -> Self {
        Self {
            recommendation: recommendation.into(),
            method: FERTILIZER_METHOD.to_string(),
        }
    }
}

/// Disease detection result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseReport {
    pub disease: String,
    pub confidence: f64,
    pub solution: String,
    pub severity: String,
}

impl DiseaseReport {
    /// Fixed result served until an image model is wired in
    pub fn stub() -> Self {
        Self {
            disease: "Rust".to_string(),
            confidence: 0.78,
            solution: "Apply fungicide treatment".to_string(),
            severity: "medium".to_string(),
        }
    }
}

/// Chat assistant reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}
