//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `WEATHER_LOOKUP_*` environment variables. Nested keys use a
//! double underscore, e.g. `WEATHER_LOOKUP_WEATHER__API_KEY`.

use std::{path::Path, time::Duration};

use application::{ApplicationError, SearchControllerConfig};
use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "WEATHER_LOOKUP";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Search behaviour
    #[serde(default)]
    pub search: SearchAppConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_weather_base_url() -> String {
    WeatherConfig::default().base_url
}

fn default_weather_timeout() -> u64 {
    WeatherConfig::default().timeout_secs
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl WeatherAppConfig {
    /// Build the client configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` when no API key is set.
    pub fn to_client_config(&self) -> Result<WeatherConfig, ApplicationError> {
        let api_key = self
            .api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ApplicationError::Configuration(format!(
                    "weather.api_key is not set (use config.toml or {ENV_PREFIX}_WEATHER__API_KEY)"
                ))
            })?;

        Ok(WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.to_string(),
            timeout_secs: self.timeout_secs,
        })
    }
}

/// Search controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAppConfig {
    /// Upper bound for a single lookup, in seconds
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_secs: u64,
}

const fn default_lookup_timeout() -> u64 {
    15
}

impl Default for SearchAppConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_secs: default_lookup_timeout(),
        }
    }
}

impl From<&SearchAppConfig> for SearchControllerConfig {
    fn from(config: &SearchAppConfig) -> Self {
        Self {
            lookup_timeout: Duration::from_secs(config.lookup_timeout_secs),
        }
    }
}

impl AppConfig {
    /// Load configuration, reading `path` instead of `config.toml` when given.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., WEATHER_LOOKUP_SEARCH__LOOKUP_TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
