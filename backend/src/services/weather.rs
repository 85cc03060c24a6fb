//! Weather service: city resolution and the transport-failure fallback

use std::sync::Arc;

use shared::{GpsCoordinates, ReferenceData, WeatherReading};

use crate::error::AppResult;
use crate::external::WeatherClient;

/// Weather service for current conditions by city
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    reference: Arc<ReferenceData>,
}

/// Outcome of mapping a city name to coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityResolution {
    pub coordinates: GpsCoordinates,
    /// False when the city was unknown and the default coordinates were used
    pub matched: bool,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(client: WeatherClient, reference: Arc<ReferenceData>) -> Self {
        Self { client, reference }
    }

    /// Map a city name or alias to coordinates, falling back to the default city
    pub fn resolve_city(&self, city: &str) -> CityResolution {
        match self.reference.resolve_city(city) {
            Some(coordinates) => CityResolution {
                coordinates,
                matched: true,
            },
            None => {
                tracing::warn!(
                    city = %city,
                    "City not found in mapping, using {} as fallback",
                    shared::reference::DEFAULT_CITY
                );
                CityResolution {
                    coordinates: self.reference.default_coordinates(),
                    matched: false,
                }
            }
        }
    }

    /// Current weather for a city.
    ///
    /// Transport failures are answered with the canned reading for the city as
    /// requested. Payload failures are returned to the caller.
    pub async fn current_weather(&self, city: &str) -> AppResult<WeatherReading> {
        let name = city.trim();
        let resolution = self.resolve_city(name);

        match self.client.get_reading(name, resolution.coordinates).await {
            Ok(reading) => Ok(reading),
            Err(e) if e.is_transport() => {
                tracing::error!("Open-Meteo API request failed: {}", e);
                Ok(WeatherReading::fallback(city))
            }
            Err(e) => Err(e),
        }
    }

    /// Whether the weather provider answers at all
    pub async fn is_available(&self) -> bool {
        self.client
            .is_reachable(self.reference.default_coordinates())
            .await
    }
}
