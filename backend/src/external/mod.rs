//! External API integrations

pub mod mandi;
pub mod weather;

pub use mandi::MandiClient;
pub use weather::WeatherClient;
