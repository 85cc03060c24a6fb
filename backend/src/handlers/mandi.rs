//! HTTP handler for mandi commodity prices

use axum::{extract::State, Json};
use shared::MandiReport;

use crate::AppState;

/// Get commodity prices from the polled mandis
pub async fn get_mandi_prices(State(state): State<AppState>) -> Json<MandiReport> {
    Json(state.mandi.price_report().await)
}
