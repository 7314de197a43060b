//! Weather data models
//!
//! Wire types for the OpenWeatherMap `/weather` endpoint and the flattened
//! [`CurrentWeather`] handed to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for a named location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Place name resolved by the provider
    pub location_name: String,
    /// Two-letter country code
    pub country_code: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Maximum temperature currently observed in the area, Celsius
    pub temperature_max: f64,
    /// Minimum temperature currently observed in the area, Celsius
    pub temperature_min: f64,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Condition text, e.g. "light rain"
    pub description: String,
    /// Observation time
    pub observed_at: DateTime<Utc>,
}

/// Body of a successful `/weather` response (only the fields we read)
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub name: String,
    pub sys: SysData,
    pub main: MainData,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
    /// Unix seconds
    pub dt: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SysData {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainData {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConditionData {
    pub description: String,
}

/// Body the provider sends with non-2xx responses
///
/// `cod` arrives as a string for some errors and a number for others.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}
