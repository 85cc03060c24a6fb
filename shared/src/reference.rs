//! Reference data store
//!
//! Crop profiles, fertilizer guidance and city coordinates are built once at
//! startup and never mutated. Load-time checks guarantee that every crop the
//! rule engine can name has a profile, so lookups on the request path cannot
//! miss.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{CropProfile, FertilizerGuidance};
use crate::rules::{CROP_RULES, DEFAULT_CROP};
use crate::types::{GpsCoordinates, Season};

/// Text served for crops without specific guidance
pub const DEFAULT_FERTILIZER_TEXT: &str = "Standard NPK 100:50:50 kg/ha";

/// City used when a weather lookup names an unknown city
pub const DEFAULT_CITY: &str = "Agra";

/// Errors raised while assembling reference data
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Crop rule names '{0}' which has no crop profile")]
    MissingCropProfile(String),

    #[error("Duplicate {table} entry: {key}")]
    DuplicateKey { table: &'static str, key: String },

    #[error("Default city '{0}' has no coordinates")]
    MissingDefaultCity(String),
}

/// A lower-cased city alias and its coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCoordinate {
    pub city_alias: String,
    pub coordinates: GpsCoordinates,
}

/// Immutable lookup tables shared by all request handlers
#[derive(Debug, Clone)]
pub struct ReferenceData {
    crops: HashMap<String, CropProfile>,
    fertilizer: HashMap<String, FertilizerGuidance>,
    cities: HashMap<String, CityCoordinate>,
    default_crop: CropProfile,
    default_coordinates: GpsCoordinates,
}

impl ReferenceData {
    /// Build the built-in tables and check their invariants
    pub fn load() -> Result<Self, ReferenceError> {
        Self::from_tables(crop_profiles(), fertilizer_guidance(), city_coordinates())
    }

    /// Assemble a store from explicit tables
    pub fn from_tables(
        crop_list: Vec<CropProfile>,
        fertilizer_list: Vec<FertilizerGuidance>,
        city_list: Vec<CityCoordinate>,
    ) -> Result<Self, ReferenceError> {
        let mut crops = HashMap::with_capacity(crop_list.len());
        for profile in crop_list {
            let key = profile.name.to_lowercase();
            if crops.insert(key.clone(), profile).is_some() {
                return Err(ReferenceError::DuplicateKey {
                    table: "crop",
                    key,
                });
            }
        }

        let mut fertilizer = HashMap::with_capacity(fertilizer_list.len());
        for guidance in fertilizer_list {
            let key = guidance.crop.to_lowercase();
            if fertilizer.insert(key.clone(), guidance).is_some() {
                return Err(ReferenceError::DuplicateKey {
                    table: "fertilizer",
                    key,
                });
            }
        }

        let mut cities = HashMap::with_capacity(city_list.len());
        for city in city_list {
            let key = city.city_alias.to_lowercase();
            if cities.insert(key.clone(), city).is_some() {
                return Err(ReferenceError::DuplicateKey {
                    table: "city",
                    key,
                });
            }
        }

        for name in CROP_RULES.iter().map(|rule| rule.crop).chain([DEFAULT_CROP]) {
            if !crops.contains_key(name) {
                return Err(ReferenceError::MissingCropProfile(name.to_string()));
            }
        }

        let default_crop = crops
            .get(DEFAULT_CROP)
            .cloned()
            .ok_or_else(|| ReferenceError::MissingCropProfile(DEFAULT_CROP.to_string()))?;
        let default_coordinates = cities
            .get(&DEFAULT_CITY.to_lowercase())
            .map(|c| c.coordinates)
            .ok_or_else(|| ReferenceError::MissingDefaultCity(DEFAULT_CITY.to_string()))?;

        Ok(Self {
            crops,
            fertilizer,
            cities,
            default_crop,
            default_coordinates,
        })
    }

    /// Look up a crop profile by name, ignoring case
    pub fn crop(&self, name: &str) -> Option<&CropProfile> {
        self.crops.get(&name.to_lowercase())
    }

    pub fn default_crop(&self) -> &CropProfile {
        &self.default_crop
    }

    pub fn crop_count(&self) -> usize {
        self.crops.len()
    }

    /// Fertilizer guidance for a crop, ignoring case
    pub fn fertilizer_text(&self, crop: &str) -> &str {
        self.fertilizer
            .get(&crop.trim().to_lowercase())
            .map(|g| g.recommendation_text.as_str())
            .unwrap_or(DEFAULT_FERTILIZER_TEXT)
    }

    /// Resolve a city name or alias, ignoring case and surrounding whitespace
    pub fn resolve_city(&self, city: &str) -> Option<GpsCoordinates> {
        self.cities
            .get(&city.trim().to_lowercase())
            .map(|c| c.coordinates)
    }

    pub fn default_coordinates(&self) -> GpsCoordinates {
        self.default_coordinates
    }
}

fn crop_profiles() -> Vec<CropProfile> {
    use Season::*;

    vec![
        CropProfile::new("wheat", Rabi, "Punjab", "450-600mm", "10-15°C"),
        CropProfile::new("rice", Kharif, "West Bengal", "1000-1500mm", "20-35°C"),
        CropProfile::new("corn", Kharif, "Karnataka", "500-700mm", "20-27°C"),
        CropProfile::new("sugarcane", WholeYear, "Uttar Pradesh", "1500-2500mm", "20-30°C"),
        CropProfile::new("cotton", Kharif, "Gujarat", "600-1000mm", "25-35°C"),
        CropProfile::new("soybean", Kharif, "Madhya Pradesh", "450-750mm", "20-30°C"),
        CropProfile::new("mustard", Rabi, "Rajasthan", "300-500mm", "10-25°C"),
        CropProfile::new("groundnut", Kharif, "Gujarat", "500-750mm", "20-35°C"),
        CropProfile::new("potato", Rabi, "Uttar Pradesh", "500-700mm", "15-20°C"),
        CropProfile::new("tomato", YearRound, "Andhra Pradesh", "600-800mm", "20-25°C"),
        CropProfile::new("onion", Rabi, "Maharashtra", "600-800mm", "13-24°C"),
        CropProfile::new("chilli", Kharif, "Andhra Pradesh", "700-1200mm", "20-30°C"),
        CropProfile::new("brinjal", YearRound, "West Bengal", "600-800mm", "20-35°C"),
        CropProfile::new("cabbage", Rabi, "Punjab", "500-700mm", "15-20°C"),
        CropProfile::new("cauliflower", Rabi, "Uttar Pradesh", "500-700mm", "15-20°C"),
        CropProfile::new("carrot", Rabi, "Punjab", "500-700mm", "15-20°C"),
        CropProfile::new("beetroot", Rabi, "Punjab", "500-700mm", "15-20°C"),
        CropProfile::new("radish", Rabi, "Uttar Pradesh", "400-600mm", "15-25°C"),
        CropProfile::new("bittergourd", Kharif, "West Bengal", "600-800mm", "25-35°C"),
        CropProfile::new("papaya", YearRound, "Karnataka", "700-1000mm", "25-30°C"),
    ]
}

fn fertilizer_guidance() -> Vec<FertilizerGuidance> {
    [
        ("wheat", "Apply 120:60:40 NPK kg/ha with 2/3 N as basal and 1/3 at tillering"),
        ("rice", "Apply 100:50:50 NPK kg/ha with split application of nitrogen in three doses"),
        ("maize", "Use 120:60:40 NPK kg/ha with 20-10-10 at sowing and 10-20-20 before tasseling"),
        ("sugarcane", "Apply 200:100:100 NPK kg/ha in 4-5 splits throughout the growing season"),
        (
            "cotton",
            "Use 100:60:60 NPK kg/ha with nitrogen applied in 4 splits from planting to flowering",
        ),
        ("soybean", "Apply 25:50:25 NPK kg/ha with phosphorus as basal and nitrogen in two splits"),
        (
            "mustard",
            "Use 80:40:40 NPK kg/ha with half nitrogen at sowing and half at branching stage",
        ),
        ("groundnut", "Apply 25:50:25 NPK kg/ha with emphasis on phosphorus for root development"),
        (
            "potato",
            "Use 120:240:120 NPK kg/ha with half as basal and half as top dressing at 30 days",
        ),
        ("tomato", "Apply 150:100:50 NPK kg/ha with nitrogen in three splits during growth stages"),
        (
            "onion",
            "Use 100:80:50 NPK kg/ha with zinc sulphate 50 kg/ha as basal for bulb development",
        ),
        ("chilli", "Apply 90:60:90 NPK kg/ha with nitrogen in three splits at 30, 60, and 90 days"),
        (
            "brinjal",
            "Use 100:50:30 NPK kg/ha with half nitrogen as basal and half at flowering stage",
        ),
        (
            "cabbage",
            "Apply 135:135:135 NPK kg/ha with half as basal and half at 30-45 days after planting",
        ),
        ("cauliflower", "Use 135:135:135 NPK kg/ha in hills or 100:100:50 NPK kg/ha in plains"),
        (
            "carrot",
            "Apply 135:135:135 NPK kg/ha with zinc sulphate 25 kg/ha as basal for root quality",
        ),
        ("beetroot", "Use 120:160:100 NPK kg/ha with half nitrogen as basal and half at 30 days"),
        ("radish", "Apply 50:100:50 NPK kg/ha with half nitrogen as basal and half at 30 days"),
        ("bittergourd", "Use 100:120:120 NPK g/pit with 10g nitrogen at 30 days after sowing"),
        ("papaya", "Apply 300:200:200 NPK g/plant/year in 3-4 splits during growing season"),
    ]
    .into_iter()
    .map(|(crop, text)| FertilizerGuidance {
        crop: crop.to_string(),
        recommendation_text: text.to_string(),
    })
    .collect()
}

fn city_coordinates() -> Vec<CityCoordinate> {
    [
        ("agra", 271767, 780081),
        ("delhi", 287041, 771025),
        ("mumbai", 190760, 728777),
        ("bengaluru", 129716, 775946),
        ("bangalore", 129716, 775946),
        ("chennai", 130827, 802707),
        ("kolkata", 225726, 883639),
        ("hyderabad", 173850, 784867),
        ("pune", 185204, 738567),
    ]
    .into_iter()
    .map(|(alias, lat, lon)| CityCoordinate {
        city_alias: alias.to_string(),
        coordinates: GpsCoordinates::from_ten_thousandths(lat, lon),
    })
    .collect()
}
