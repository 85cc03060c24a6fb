//! Mandi price service
//!
//! Polls every market concurrently, keeps at most two records per city and
//! falls back to the static commodity list when nothing usable comes back.

use chrono::Local;
use shared::{MandiRecord, MandiReport, MANDI_MARKETS, RECORDS_PER_CITY};

use crate::error::{AppError, AppResult};
use crate::external::mandi::{MandiClient, MANDI_SOURCE};

/// Mandi price aggregation service
#[derive(Clone)]
pub struct MandiService {
    client: MandiClient,
}

impl MandiService {
    /// Create a new MandiService instance
    pub fn new(client: MandiClient) -> Self {
        Self { client }
    }

    /// Build a price report, never failing.
    pub async fn price_report(&self) -> MandiReport {
        let update_time = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        match self.collect_prices().await {
            Ok(commodities) if !commodities.is_empty() => {
                MandiReport::live(commodities, MANDI_SOURCE, update_time)
            }
            Ok(_) => {
                tracing::warn!("All AGMARKNET requests failed, using static fallback");
                MandiReport::fallback(update_time)
            }
            Err(e) => {
                tracing::error!("Critical error in mandi price API: {}", e);
                MandiReport::fallback(update_time)
            }
        }
    }

    /// Fetch every market in parallel and join the results in market order.
    /// A failing market is logged and skipped.
    async fn collect_prices(&self) -> AppResult<Vec<MandiRecord>> {
        if !self.client.has_api_key() {
            return Err(AppError::Configuration(
                "Mandi API key not configured".to_string(),
            ));
        }

        let handles: Vec<_> = MANDI_MARKETS
            .iter()
            .map(|market| {
                let client = self.client.clone();
                let market = *market;
                tokio::spawn(async move { client.get_market_prices(&market).await })
            })
            .collect();

        let mut commodities = Vec::new();
        for (market, handle) in MANDI_MARKETS.iter().zip(handles) {
            let result = handle.await.map_err(|e| {
                AppError::Internal(format!("Mandi task for {} failed: {}", market.city, e))
            })?;

            match result {
                Ok(records) => {
                    tracing::debug!(
                        city = market.city,
                        count = records.len(),
                        "Fetched mandi prices"
                    );
                    commodities.extend(records.into_iter().take(RECORDS_PER_CITY));
                }
                Err(e) => {
                    tracing::error!("Failed to fetch data for {}: {}", market.city, e);
                }
            }
        }

        Ok(commodities)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        extract::Query, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
    };

    use super::*;
    use crate::config::MandiConfig;
    use crate::test_support::{spawn_stub, UNREACHABLE_URL};

    const FAILING_MARKETS: [&str; 3] = ["Azadpur", "Koyambedu", "Jaipur"];

    fn service(base_url: &str, api_key: Option<&str>) -> MandiService {
        let config = MandiConfig {
            base_url: base_url.to_string(),
            api_key: api_key.map(str::to_string),
            timeout_secs: 2,
        };
        MandiService::new(MandiClient::new(&config).unwrap())
    }

    /// Three records per market, except markets in FAILING_MARKETS which answer 500
    async fn agmarknet(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        let market = params.get("filters[market]").cloned().unwrap_or_default();
        if params.get("api-key").map(String::as_str) != Some("test-key") {
            return StatusCode::FORBIDDEN.into_response();
        }
        if FAILING_MARKETS.contains(&market.as_str()) {
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }

        let records: Vec<serde_json::Value> = (1..=3)
            .map(|i| {
                serde_json::json!({
                    "commodity": format!("{} item {}", market, i),
                    "modal_price": format!("{}", 1000 + i),
                    "variety": "Local"
                })
            })
            .collect();
        Json(serde_json::json!({ "records": records })).into_response()
    }

    #[tokio::test]
    async fn test_partial_failures_keep_successful_cities_in_order() {
        let base = spawn_stub(Router::new().route("/", get(agmarknet))).await;
        let report = service(&base, Some("test-key")).price_report().await;

        assert_eq!(report.source, "AGMARKNET");
        assert_eq!(report.commodities.len(), 14);
        assert_eq!(report.total_cities, Some(10));

        let expected_cities: Vec<&str> = MANDI_MARKETS
            .iter()
            .filter(|m| !FAILING_MARKETS.contains(&m.market))
            .flat_map(|m| [m.city, m.city])
            .collect();
        let cities: Vec<&str> = report.commodities.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, expected_cities);

        assert_eq!(report.commodities[0].name, "Agra item 1");
        assert_eq!(report.commodities[1].name, "Agra item 2");
        assert_eq!(report.commodities[2].market.as_deref(), Some("Mumbai"));
        assert!(report.commodities.iter().all(|r| r.variety.as_deref() == Some("Local")));
    }

    #[tokio::test]
    async fn test_all_failures_return_fallback() {
        let report = service(UNREACHABLE_URL, Some("test-key")).price_report().await;
        assert_eq!(report.commodities, MandiRecord::fallback_list());
        assert_eq!(report.source, "Mock fallback");
        assert!(report.cities_covered.is_none());
    }

    #[tokio::test]
    async fn test_empty_records_return_fallback() {
        let base = spawn_stub(Router::new().route(
            "/",
            get(|| async { Json(serde_json::json!({ "records": [] })) }),
        ))
        .await;

        let report = service(&base, Some("test-key")).price_report().await;
        assert_eq!(report.commodities, MandiRecord::fallback_list());
    }

    #[tokio::test]
    async fn test_malformed_market_is_skipped() {
        let base = spawn_stub(Router::new().route(
            "/",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                if params.get("filters[market]").map(String::as_str) == Some("Pune") {
                    Json(serde_json::json!({
                        "records": [{ "commodity": "Onion", "modal_price": "1900" }]
                    }))
                    .into_response()
                } else {
                    "<html>maintenance</html>".into_response()
                }
            }),
        ))
        .await;

        let report = service(&base, Some("test-key")).price_report().await;
        assert_eq!(report.commodities.len(), 1);
        assert_eq!(report.commodities[0].city, "Pune");
        assert_eq!(report.commodities[0].variety.as_deref(), Some("Common"));
    }

    #[tokio::test]
    async fn test_missing_api_key_returns_fallback() {
        let base = spawn_stub(Router::new().route("/", get(agmarknet))).await;
        let report = service(&base, None).price_report().await;
        assert_eq!(report.commodities, MandiRecord::fallback_list());
    }
}
