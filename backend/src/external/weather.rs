//! Weather API client for fetching weather data
//!
//! Integrates with Open-Meteo (no API key) for current conditions and a
//! two-day daily forecast.

use std::time::Duration;

use chrono::Local;
use reqwest::Client;
use serde::Deserialize;
use shared::{condition_label, ForecastDay, GpsCoordinates, WeatherReading};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

pub const WEATHER_SOURCE: &str = "Open-Meteo.com";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const TIMEZONE: &str = "Asia/Kolkata";
const FORECAST_DAY_LABELS: [&str; 2] = ["Today", "Tomorrow"];

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    probe_timeout: Duration,
}

/// Open-Meteo forecast response
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current: OpenMeteoCurrent,
    daily: OpenMeteoDaily,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: i64,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoDaily {
    weather_code: Vec<i64>,
    temperature_2m_max: Vec<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("krishi-sevak/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::Configuration(format!("Failed to build weather client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            probe_timeout: Duration::from_secs(config.probe_timeout_secs),
        })
    }

    /// Fetch current conditions and a two-day outlook.
    ///
    /// Connection failures, timeouts and non-success statuses come back as
    /// `UpstreamTransport`; a response that arrives but cannot be understood
    /// comes back as `UpstreamPayload`.
    pub async fn get_reading(
        &self,
        city: &str,
        coordinates: GpsCoordinates,
    ) -> AppResult<WeatherReading> {
        let url = format!("{}/forecast", self.base_url);
        let latitude = coordinates.latitude.to_string();
        let longitude = coordinates.longitude.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_FIELDS),
                ("daily", DAILY_FIELDS),
                ("forecast_days", "2"),
                ("timezone", TIMEZONE),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                AppError::UpstreamTransport(format!("Weather API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamTransport(format!(
                "Weather API error: {}",
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| {
                AppError::UpstreamTransport(format!("Weather API body read failed: {}", e))
            })?;

        let data: OpenMeteoResponse =
            serde_json::from_slice(&body).map_err(|e| AppError::UpstreamPayload {
                service: "weather",
                detail: format!("Failed to parse weather response: {}", e),
            })?;

        convert_response(city, data)
    }

    /// Lightweight reachability check against the default coordinates
    pub async fn is_reachable(&self, coordinates: GpsCoordinates) -> bool {
        let url = format!("{}/forecast", self.base_url);
        let latitude = coordinates.latitude.to_string();
        let longitude = coordinates.longitude.to_string();

        let result = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_FIELDS),
                ("forecast_days", "1"),
            ])
            .timeout(self.probe_timeout)
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::error!("Open-Meteo API probe failed: {}", e);
                false
            }
        }
    }
}

/// Convert an Open-Meteo response to our format
fn convert_response(city: &str, data: OpenMeteoResponse) -> AppResult<WeatherReading> {
    let daily = &data.daily;
    let mut forecast = Vec::with_capacity(FORECAST_DAY_LABELS.len());

    for (index, day) in FORECAST_DAY_LABELS.iter().enumerate() {
        let (Some(max), Some(code)) = (
            daily.temperature_2m_max.get(index),
            daily.weather_code.get(index),
        ) else {
            return Err(AppError::UpstreamPayload {
                service: "weather",
                detail: format!("Daily forecast is missing day {}", index + 1),
            });
        };
        forecast.push(ForecastDay::new(day, round_degrees(*max), condition_label(*code)));
    }

    Ok(WeatherReading {
        city: city.to_string(),
        temperature: round_degrees(data.current.temperature_2m),
        condition: condition_label(data.current.weather_code).to_string(),
        humidity: Some(round_degrees(data.current.relative_humidity_2m)),
        forecast,
        source: WEATHER_SOURCE.to_string(),
        last_updated: Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
    })
}

fn round_degrees(value: f64) -> i32 {
    value.round() as i32
}
