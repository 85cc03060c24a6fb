//! Crop reference models

use serde::{Deserialize, Serialize};

use crate::types::Season;

/// Agronomic attributes of a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropProfile {
    /// Lookup key; carried by the enclosing response instead of the details object
    #[serde(skip)]
    pub name: String,
    pub season: Season,
    #[serde(rename = "best_state")]
    pub best_region: String,
    /// Seasonal water requirement, e.g. "450-600mm"
    #[serde(rename = "water")]
    pub water_requirement: String,
    #[serde(rename = "temperature")]
    pub temperature_range: String,
}

impl CropProfile {
    pub fn new(
        name: &str,
        season: Season,
        best_region: &str,
        water_requirement: &str,
        temperature_range: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            season,
            best_region: best_region.to_string(),
            water_requirement: water_requirement.to_string(),
            temperature_range: temperature_range.to_string(),
        }
    }
}

/// Fertilizer guidance for a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FertilizerGuidance {
    pub crop: String,
    pub recommendation_text: String,
}

/// Crop recommendation returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropRecommendation {
    pub crop: String,
    pub details: CropProfile,
    pub confidence: f64,
}
