//! Mandi (wholesale market) price models

use serde::{Deserialize, Serialize};

/// Every price is quoted per quintal (100 kg)
pub const PRICE_UNIT: &str = "per quintal";

/// Label for the set of markets covered by a report
pub const MANDI_LOCATION: &str = "Top 10 Indian Cities";

/// A city and the regulated market polled for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandiMarket {
    pub city: &'static str,
    pub market: &'static str,
    pub state: &'static str,
}

impl MandiMarket {
    pub const fn new(city: &'static str, market: &'static str, state: &'static str) -> Self {
        Self {
            city,
            market,
            state,
        }
    }
}

/// Markets polled for a price report, in report order
pub const MANDI_MARKETS: [MandiMarket; 10] = [
    MandiMarket::new("Agra", "Agra", "Uttar Pradesh"),
    MandiMarket::new("Delhi", "Azadpur", "Delhi"),
    MandiMarket::new("Mumbai", "Mumbai", "Maharashtra"),
    MandiMarket::new("Kolkata", "Kolkata", "West Bengal"),
    MandiMarket::new("Chennai", "Koyambedu", "Tamil Nadu"),
    MandiMarket::new("Bengaluru", "Bangalore", "Karnataka"),
    MandiMarket::new("Hyderabad", "Hyderabad", "Telangana"),
    MandiMarket::new("Pune", "Pune", "Maharashtra"),
    MandiMarket::new("Lucknow", "Lucknow", "Uttar Pradesh"),
    MandiMarket::new("Jaipur", "Jaipur", "Rajasthan"),
];

/// Upper bound on commodities reported per city
pub const RECORDS_PER_CITY: usize = 2;

/// (commodity, modal price, city)
pub const FALLBACK_COMMODITIES: [(&str, &str, &str); 4] = [
    ("Wheat", "2200", "Agra"),
    ("Rice", "3100", "Delhi"),
    ("Onion", "1800", "Mumbai"),
    ("Potato", "1200", "Kolkata"),
];

/// A commodity price observed at a market
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MandiRecord {
    pub name: String,
    /// Modal price as reported, "N/A" when missing
    pub price: String,
    pub unit: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
}

impl MandiRecord {
    pub fn fallback_list() -> Vec<MandiRecord> {
        FALLBACK_COMMODITIES
            .iter()
            .map(|(name, price, city)| MandiRecord {
                name: name.to_string(),
                price: price.to_string(),
                unit: PRICE_UNIT.to_string(),
                city: city.to_string(),
                market: None,
                variety: None,
            })
            .collect()
    }
}

/// Aggregated price report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MandiReport {
    pub commodities: Vec<MandiRecord>,
    pub location: String,
    pub source: String,
    pub update_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cities: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cities_covered: Option<Vec<String>>,
}

impl MandiReport {
    /// Report built from live market data
    pub fn live(commodities: Vec<MandiRecord>, source: &str, update_time: String) -> Self {
        Self {
            commodities,
            location: MANDI_LOCATION.to_string(),
            source: source.to_string(),
            update_time,
            total_cities: Some(MANDI_MARKETS.len()),
            cities_covered: Some(MANDI_MARKETS.iter().map(|m| m.city.to_string()).collect()),
        }
    }

    /// Report carrying the static commodity list
    pub fn fallback(update_time: String) -> Self {
        Self {
            commodities: MandiRecord::fallback_list(),
            location: MANDI_LOCATION.to_string(),
            source: crate::models::FALLBACK_SOURCE.to_string(),
            update_time,
            total_cities: None,
            cities_covered: None,
        }
    }
}
