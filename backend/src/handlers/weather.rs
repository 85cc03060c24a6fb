//! HTTP handler for current weather by city

use axum::{extract::State, Json};
use shared::{reference::DEFAULT_CITY, WeatherReading};

use crate::error::AppResult;
use crate::extract::LenientQuery;
use crate::AppState;

/// City named by the `city` query parameter; the first one wins when repeated
fn requested_city(query: &LenientQuery) -> &str {
    query.first("city").unwrap_or(DEFAULT_CITY)
}

/// Get current weather and a two-day outlook for a city
pub async fn get_weather(
    State(state): State<AppState>,
    query: LenientQuery,
) -> AppResult<Json<WeatherReading>> {
    let city = requested_city(&query);
    tracing::info!("Raw city received: '{}'", city);
    let reading = state.weather.current_weather(city).await?;
    Ok(Json(reading))
}
