//! Weather provider port
//!
//! Defines the interface for fetching current conditions and the raw
//! 3-hour-step forecast feed. Implementations are responsible for decoding
//! the provider's wire format and normalizing units to Celsius and km/h.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{ForecastSample, GeoLocation};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ApplicationError;

/// A location the user asked about, either by name or by coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationQuery {
    /// City name as typed by the user
    City(String),
    /// Geographic coordinates (e.g. from a geolocation source)
    Coordinates(GeoLocation),
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(name) => write!(f, "{name}"),
            Self::Coordinates(location) => write!(f, "{location}"),
        }
    }
}

/// Current weather conditions at the resolved location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Resolved city name
    pub city: String,
    /// ISO country code of the resolved city
    pub country: String,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Apparent/feels-like temperature in Celsius
    pub feels_like_celsius: f64,
    /// Relative humidity in percent (0-100)
    pub humidity_percent: u8,
    /// Surface pressure in hPa
    pub pressure_hpa: u32,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Provider condition code (e.g. "01d")
    pub condition_code: String,
    /// Human-readable condition description
    pub description: String,
    /// When this data was observed
    pub observed_at: DateTime<Utc>,
}

/// Port for weather data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a location
    async fn current_conditions(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the raw 3-hour-step forecast feed for a location
    ///
    /// Samples are chronological and already unit-normalized to Celsius.
    async fn forecast_samples(
        &self,
        query: &LocationQuery,
    ) -> Result<Vec<ForecastSample>, ApplicationError>;
}
