//! Weather snapshot - current conditions returned for one successful lookup

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Humidity, normalize};

/// Current conditions for a location, as reported by the weather provider
///
/// Snapshots are immutable once received; a new lookup produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Place name as reported by the provider
    pub location_name: String,
    /// ISO 3166 country code (e.g. "FR")
    pub country_code: String,
    /// Current temperature in Celsius
    pub temperature_c: f64,
    /// Highest temperature currently observed in the area, Celsius
    pub temperature_max_c: f64,
    /// Lowest temperature currently observed in the area, Celsius
    pub temperature_min_c: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Free-form condition text (e.g. "scattered clouds")
    pub condition_description: String,
    /// When the provider observed these conditions
    pub observed_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Observation time as Unix seconds
    #[must_use]
    pub fn observed_at_unix_seconds(&self) -> i64 {
        self.observed_at.timestamp()
    }

    /// Condition text title-cased for display ("Scattered Clouds")
    #[must_use]
    pub fn condition_label(&self) -> String {
        normalize(&self.condition_description)
    }

    /// "Name, CC" label shown next to the temperature
    #[must_use]
    pub fn place_label(&self) -> String {
        format!("{}, {}", self.location_name, self.country_code)
    }
}
