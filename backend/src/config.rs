//! Configuration management for the Krishi Sevak backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides, e.g. `KRISHI__MANDI__API_KEY`
//! 4. A bare `PORT` variable, which wins over everything for the listen port

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Open-Meteo weather API configuration
    pub weather: WeatherConfig,

    /// AGMARKNET mandi price API configuration
    pub mandi: MandiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Directory holding index.html, manifest.json and the other site assets
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL
    pub base_url: String,

    /// Timeout for forecast requests, in seconds
    pub timeout_secs: u64,

    /// Timeout for the reachability probe, in seconds
    pub probe_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MandiConfig {
    /// AGMARKNET resource URL on data.gov.in
    pub base_url: String,

    /// data.gov.in API key
    pub api_key: Option<String>,

    /// Timeout for each per-market request, in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("KRISHI_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let server = ServerConfig::default();
        let weather = WeatherConfig::default();
        let mandi = MandiConfig::default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", i64::from(server.port))?
            .set_default("server.host", server.host)?
            .set_default("server.static_dir", server.static_dir)?
            .set_default("weather.base_url", weather.base_url)?
            .set_default("weather.timeout_secs", weather.timeout_secs as i64)?
            .set_default("weather.probe_timeout_secs", weather.probe_timeout_secs as i64)?
            .set_default("mandi.base_url", mandi.base_url)?
            .set_default("mandi.timeout_secs", mandi.timeout_secs as i64)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (KRISHI__SECTION__KEY)
            .add_source(
                Environment::with_prefix("KRISHI")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every outbound call fail
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.base_url.trim().is_empty() {
            return Err(ConfigError::Message("weather.base_url must not be empty".into()));
        }
        if self.mandi.base_url.trim().is_empty() {
            return Err(ConfigError::Message("mandi.base_url must not be empty".into()));
        }
        if self.weather.timeout_secs == 0
            || self.weather.probe_timeout_secs == 0
            || self.mandi.timeout_secs == 0
        {
            return Err(ConfigError::Message("timeouts must be at least one second".into()));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.open-meteo.com/v1".to_string(),
            timeout_secs: 10,
            probe_timeout_secs: 5,
        }
    }
}

impl Default for MandiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.data.gov.in/resource/9ef84268-d588-465a-a308-a864a43d0070"
                .to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.weather.probe_timeout_secs, 5);
        assert!(config.mandi.api_key.is_none());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.mandi.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = Config::default();
        config.weather.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
