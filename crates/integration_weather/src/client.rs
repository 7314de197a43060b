//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap current weather API.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiErrorBody, ApiResponse, CurrentWeather};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider has no location matching the query
    #[error("Location not found: {0}")]
    NotFound(String),

    /// API key missing, invalid or blocked
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `appid` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a location name such as "France" or "New York"
    async fn get_current(&self, location: &str) -> Result<CurrentWeather, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/weather", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a non-success response to an error, keeping the provider's message
    async fn error_from_response(response: Response) -> WeatherError {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .map(|body| body.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));

        match status {
            StatusCode::NOT_FOUND => WeatherError::NotFound(message),
            StatusCode::UNAUTHORIZED => WeatherError::Unauthorized(message),
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(message),
            _ => WeatherError::RequestFailed(message),
        }
    }

    /// Flatten the wire response into [`CurrentWeather`]
    fn parse_current_weather(api: ApiResponse) -> Result<CurrentWeather, WeatherError> {
        let observed_at = Self::parse_timestamp(api.dt)?;
        let description = api
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| WeatherError::ParseError("No weather condition in response".into()))?;

        Ok(CurrentWeather {
            location_name: api.name,
            country_code: api.sys.country,
            temperature: api.main.temp,
            temperature_max: api.main.temp_max,
            temperature_min: api.main.temp_min,
            humidity: api.main.humidity,
            description,
            observed_at,
        })
    }

    fn parse_timestamp(unix_seconds: i64) -> Result<DateTime<Utc>, WeatherError> {
        Utc.timestamp_opt(unix_seconds, 0)
            .single()
            .ok_or_else(|| WeatherError::ParseError(format!("Invalid timestamp: {unix_seconds}")))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn get_current(&self, location: &str) -> Result<CurrentWeather, WeatherError> {
        debug!(endpoint = %self.endpoint(), "Fetching current weather");

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("q", location),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Self::parse_current_weather(api_response)
    }
}
