//! Weather data models

use serde::{Deserialize, Serialize};

/// Source tag carried by readings served without reaching the provider
pub const FALLBACK_SOURCE: &str = "Mock fallback";

/// Current conditions plus a two-day outlook for a city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherReading {
    pub city: String,
    pub temperature: i32,
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<i32>,
    pub forecast: Vec<ForecastDay>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// One day of the outlook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastDay {
    pub day: String,
    /// Daily maximum, formatted as "32°C"
    pub temp: String,
    pub condition: String,
}

impl ForecastDay {
    pub fn new(day: &str, temp_celsius: i32, condition: &str) -> Self {
        Self {
            day: day.to_string(),
            temp: format!("{}°C", temp_celsius),
            condition: condition.to_string(),
        }
    }
}

impl WeatherReading {
    /// Canned reading served when the provider cannot be reached.
    /// Echoes the city exactly as the caller asked for it.
    pub fn fallback(city: &str) -> Self {
        Self {
            city: city.to_string(),
            temperature: 32,
            condition: "Sunny".to_string(),
            humidity: None,
            forecast: vec![
                ForecastDay::new("Today", 32, "Sunny"),
                ForecastDay::new("Tomorrow", 33, "Sunny"),
            ],
            source: FALLBACK_SOURCE.to_string(),
            last_updated: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == FALLBACK_SOURCE
    }
}

/// Map a WMO weather interpretation code to a label
pub fn condition_label(code: i64) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mostly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}
