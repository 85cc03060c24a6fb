//! AGMARKNET client for mandi commodity prices (data.gov.in)

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::{MandiMarket, MandiRecord, PRICE_UNIT};

use crate::config::MandiConfig;
use crate::error::{AppError, AppResult};

pub const MANDI_SOURCE: &str = "AGMARKNET";

/// Page size requested per market; only the first few records are reported
const PAGE_LIMIT: &str = "5";

/// Mandi price API client
#[derive(Clone)]
pub struct MandiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

/// data.gov.in resource response
#[derive(Debug, Deserialize)]
struct AgmarknetResponse {
    #[serde(default)]
    records: Vec<AgmarknetRecord>,
}

#[derive(Debug, Deserialize)]
struct AgmarknetRecord {
    commodity: Option<String>,
    /// Reported as a string by data.gov.in, but numbers are accepted too
    modal_price: Option<serde_json::Value>,
    variety: Option<String>,
}

impl MandiClient {
    /// Create a new MandiClient from configuration
    pub fn new(config: &MandiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("krishi-sevak/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build mandi client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config
                .api_key
                .as_ref()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch one page of commodity prices for a market
    pub async fn get_market_prices(&self, market: &MandiMarket) -> AppResult<Vec<MandiRecord>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("Mandi API key not configured".to_string()))?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api-key", api_key),
                ("format", "json"),
                ("offset", "0"),
                ("limit", PAGE_LIMIT),
                ("filters[market]", market.market),
                ("filters[state]", market.state),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::UpstreamTransport(format!("Mandi API request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamTransport(format!(
                "Mandi API error for {}: {}",
                market.market,
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| {
                AppError::UpstreamTransport(format!("Mandi API body read failed: {}", e))
            })?;

        let data: AgmarknetResponse =
            serde_json::from_slice(&body).map_err(|e| AppError::UpstreamPayload {
                service: "mandi",
                detail: format!("Failed to parse mandi response: {}", e),
            })?;

        Ok(data
            .records
            .into_iter()
            .map(|record| convert_record(market, record))
            .collect())
    }
}

fn convert_record(market: &MandiMarket, record: AgmarknetRecord) -> MandiRecord {
    let price = match record.modal_price {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Null) | None => "N/A".to_string(),
        Some(other) => other.to_string(),
    };

    MandiRecord {
        name: record.commodity.unwrap_or_else(|| "Unknown".to_string()),
        price,
        unit: PRICE_UNIT.to_string(),
        city: market.city.to_string(),
        market: Some(market.market.to_string()),
        variety: Some(record.variety.unwrap_or_else(|| "Common".to_string())),
    }
}
