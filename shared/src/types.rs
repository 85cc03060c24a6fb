//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build coordinates from ten-thousandths of a degree
    pub fn from_ten_thousandths(latitude: i64, longitude: i64) -> Self {
        Self::new(Decimal::new(latitude, 4), Decimal::new(longitude, 4))
    }
}

/// Indian cropping seasons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Winter-sown
    Rabi,
    /// Monsoon-sown
    Kharif,
    WholeYear,
    YearRound,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Rabi => "rabi",
            Season::Kharif => "kharif",
            Season::WholeYear => "whole_year",
            Season::YearRound => "year_round",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
