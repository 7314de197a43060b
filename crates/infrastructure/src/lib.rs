//! Infrastructure layer - Adapters, configuration and log setup
//!
//! Wires the application ports to the OpenWeatherMap client and the system
//! clock, and loads [`AppConfig`] from file and environment.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::{SystemClock, WeatherAdapter};
pub use config::{AppConfig, SearchAppConfig, WeatherAppConfig};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
