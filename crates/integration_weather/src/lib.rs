//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap current weather API
//! (<https://openweathermap.org/current>). Locations are looked up by name.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::CurrentWeather;
