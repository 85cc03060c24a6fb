//! HTTP handlers

pub mod advisory;
pub mod health;
pub mod mandi;
pub mod weather;

pub use advisory::{chat, detect_disease, recommend_crop, recommend_fertilizer};
pub use health::{health_check, service_status};
pub use mandi::get_mandi_prices;
pub use weather::get_weather;
