//! Weather adapter - Implements WeatherPort using integration_weather

use application::{ApplicationError, WeatherPort};
use async_trait::async_trait;
use domain::{Humidity, LocationKey, WeatherSnapshot};
use integration_weather::{
    CurrentWeather, OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap current weather API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::NotFound(e) => ApplicationError::NotFound(e),
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e)
            | WeatherError::ParseError(e) => ApplicationError::ExternalService(e),
            WeatherError::Unauthorized(e) => ApplicationError::NotAuthorized(e),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert integration current weather to a domain snapshot
    fn map_current(current: CurrentWeather) -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: current.location_name,
            country_code: current.country_code,
            temperature_c: current.temperature,
            temperature_max_c: current.temperature_max,
            temperature_min_c: current.temperature_min,
            humidity: Humidity::clamped(current.humidity),
            condition_description: current.description,
            observed_at: current.observed_at,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self, location), fields(location = %location))]
    async fn current_weather(
        &self,
        location: &LocationKey,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let current = self
            .client
            .get_current(location.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(
            place = %current.location_name,
            country = %current.country_code,
            temperature = current.temperature,
            "Received current weather"
        );

        Ok(Self::map_current(current))
    }
}
