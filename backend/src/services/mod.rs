//! Services wrapping the external clients with the fallback policy

pub mod mandi;
pub mod weather;

pub use mandi::MandiService;
pub use weather::WeatherService;
