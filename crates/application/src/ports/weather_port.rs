//! Weather gateway port
//!
//! Defines how the application asks an external provider for current
//! conditions at a location.

use async_trait::async_trait;
use domain::{LocationKey, WeatherSnapshot};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for current-weather lookups
///
/// Each call is a single one-shot request: no retry, no caching.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions for a normalized location
    async fn current_weather(
        &self,
        location: &LocationKey,
    ) -> Result<WeatherSnapshot, ApplicationError>;
}
