//! Rule engine for crop recommendation and chat replies
//!
//! Crop selection walks [`CROP_RULES`] top to bottom and takes the first row
//! whose soil, season and qualifier tests all pass. Each soil group ends with
//! a season catch-all, so once a soil group matches no later group is tried.

use crate::models::{ChatReply, CropRecommendation, FertilizerAdvice};
use crate::reference::ReferenceData;

/// Crop substituted when a rule names a crop without a profile
pub const DEFAULT_CROP: &str = "corn";

/// Fixed confidence attached to every rule-based recommendation
pub const RECOMMENDATION_CONFIDENCE: f64 = 0.85;

pub const WEATHER_CHAT_REPLY: &str =
    "I can provide weather for Agra, Delhi, Mumbai, and more. Use the weather tab!";
pub const DEFAULT_CHAT_REPLY: &str = "How can I help with farming today?";

/// One row of the crop rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRule {
    /// Soil matches if it contains any of these; empty matches every soil
    pub soil: &'static [&'static str],
    /// Season keyword; `None` matches every season
    pub season: Option<&'static str>,
    /// Extra keyword the soil text must contain
    pub soil_qualifier: Option<&'static str>,
    pub crop: &'static str,
}

impl CropRule {
    const fn new(
        soil: &'static [&'static str],
        season: Option<&'static str>,
        crop: &'static str,
    ) -> Self {
        Self {
            soil,
            season,
            soil_qualifier: None,
            crop,
        }
    }

    const fn qualified(self, qualifier: &'static str) -> Self {
        Self {
            soil: self.soil,
            season: self.season,
            soil_qualifier: Some(qualifier),
            crop: self.crop,
        }
    }

    /// Both inputs must already be lower-cased
    pub fn matches(&self, soil: &str, season: &str) -> bool {
        let soil_ok = self.soil.is_empty() || self.soil.iter().any(|kw| soil.contains(kw));
        let season_ok = self.season.map_or(true, |kw| season.contains(kw));
        let qualifier_ok = self.soil_qualifier.map_or(true, |kw| soil.contains(kw));
        soil_ok && season_ok && qualifier_ok
    }
}

const CLAY: &[&str] = &["clay"];
const SANDY: &[&str] = &["sandy"];
const LOAMY: &[&str] = &["loamy"];
const BLACK: &[&str] = &["black", "regur"];
const RED: &[&str] = &["red"];
const ANY_SOIL: &[&str] = &[];

const KHARIF: Option<&str> = Some("kharif");
const RABI: Option<&str> = Some("rabi");
const ANY_SEASON: Option<&str> = None;

/// Ordered crop rules, evaluated first-match-wins
pub const CROP_RULES: &[CropRule] = &[
    CropRule::new(CLAY, KHARIF, "rice"),
    CropRule::new(CLAY, RABI, "wheat"),
    CropRule::new(CLAY, ANY_SEASON, "sugarcane"),
    CropRule::new(SANDY, KHARIF, "groundnut").qualified("dry"),
    CropRule::new(SANDY, KHARIF, "cotton"),
    CropRule::new(SANDY, RABI, "potato"),
    CropRule::new(SANDY, ANY_SEASON, "radish"),
    CropRule::new(LOAMY, KHARIF, "corn"),
    CropRule::new(LOAMY, RABI, "wheat"),
    CropRule::new(LOAMY, ANY_SEASON, "tomato"),
    CropRule::new(BLACK, KHARIF, "cotton"),
    CropRule::new(BLACK, ANY_SEASON, "soybean"),
    CropRule::new(RED, KHARIF, "chilli"),
    CropRule::new(RED, ANY_SEASON, "carrot"),
    CropRule::new(ANY_SOIL, KHARIF, "corn"),
    CropRule::new(ANY_SOIL, RABI, "mustard"),
    CropRule::new(ANY_SOIL, ANY_SEASON, "brinjal"),
];

/// Pick a crop name for a soil and season description
pub fn crop_for(soil: &str, season: &str) -> &'static str {
    let soil = soil.to_lowercase();
    let season = season.to_lowercase();

    CROP_RULES
        .iter()
        .find(|rule| rule.matches(&soil, &season))
        .map(|rule| rule.crop)
        .unwrap_or(DEFAULT_CROP)
}

/// Recommend a crop with its profile.
///
/// A rule naming a crop the store does not know is a configuration bug;
/// it is logged and the default crop is served instead.
pub fn recommend(reference: &ReferenceData, soil: &str, season: &str) -> CropRecommendation {
    let name = crop_for(soil, season);

    let details = match reference.crop(name) {
        Some(profile) => profile.clone(),
        None => {
            tracing::error!(
                crop = name,
                "Crop rule produced a crop with no profile, using default"
            );
            reference.default_crop().clone()
        }
    };

    CropRecommendation {
        crop: details.name.clone(),
        details,
        confidence: RECOMMENDATION_CONFIDENCE,
    }
}

/// Fertilizer advice for a crop name
pub fn fertilizer_for(reference: &ReferenceData, crop: &str) -> FertilizerAdvice {
    FertilizerAdvice::new(reference.fertilizer_text(crop))
}

/// Canned reply for a chat message
pub fn reply_for(message: &str) -> ChatReply {
    let reply = if message.to_lowercase().contains("weather") {
        WEATHER_CHAT_REPLY
    } else {
        DEFAULT_CHAT_REPLY
    };

    ChatReply {
        reply: reply.to_string(),
    }
}
