//! Demo weather provider
//!
//! Serves canned data for a fixed set of cities so the dashboard works
//! without an API key. Unknown cities and coordinate queries fall back to
//! the default city, mirroring how the live dashboard defaults to
//! Johannesburg.

use application::{ApplicationError, CurrentConditions, LocationQuery, WeatherPort};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use domain::ForecastSample;
use tracing::debug;

use crate::models::MPS_TO_KMH;

struct DemoCity {
    name: &'static str,
    temperature: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
    wind_mps: f64,
    code: &'static str,
    description: &'static str,
}

static DEMO_CITIES: [DemoCity; 4] = [
    DemoCity {
        name: "Johannesburg",
        temperature: 24.0,
        feels_like: 25.0,
        humidity: 45,
        pressure: 1013,
        wind_mps: 3.3,
        code: "01d",
        description: "Sunny",
    },
    DemoCity {
        name: "Cape Town",
        temperature: 18.0,
        feels_like: 17.0,
        humidity: 65,
        pressure: 1015,
        wind_mps: 5.2,
        code: "02d",
        description: "Partly Cloudy",
    },
    DemoCity {
        name: "Durban",
        temperature: 26.0,
        feels_like: 28.0,
        humidity: 70,
        pressure: 1012,
        wind_mps: 2.1,
        code: "50d",
        description: "Humid",
    },
    DemoCity {
        name: "Pretoria",
        temperature: 25.0,
        feels_like: 26.0,
        humidity: 50,
        pressure: 1014,
        wind_mps: 3.8,
        code: "01d",
        description: "Clear",
    },
];

/// One canned forecast sample per day for the next five days:
/// (day offset, temperature, condition code, description)
const DEMO_FORECAST: [(i64, f64, &str, &str); 5] = [
    (1, 25.0, "01d", "Sunny"),
    (2, 23.0, "02d", "Partly Cloudy"),
    (3, 22.0, "03d", "Cloudy"),
    (4, 21.0, "10d", "Light Rain"),
    (5, 24.0, "01d", "Clear"),
];

/// Offline provider with canned data for a handful of South African cities
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoWeatherProvider;

impl DemoWeatherProvider {
    /// Create a demo provider
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn lookup(name: &str) -> &'static DemoCity {
        DEMO_CITIES
            .iter()
            .find(|city| city.name.eq_ignore_ascii_case(name))
            .unwrap_or(&DEMO_CITIES[0])
    }
}

#[async_trait]
impl WeatherPort for DemoWeatherProvider {
    async fn current_conditions(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentConditions, ApplicationError> {
        let city = match query {
            LocationQuery::City(name) => Self::lookup(name),
            LocationQuery::Coordinates(_) => &DEMO_CITIES[0],
        };
        debug!(city = city.name, "serving demo conditions");

        Ok(CurrentConditions {
            city: city.name.to_string(),
            country: "ZA".to_string(),
            temperature_celsius: city.temperature,
            feels_like_celsius: city.feels_like,
            humidity_percent: city.humidity,
            pressure_hpa: city.pressure,
            wind_speed_kmh: city.wind_mps * MPS_TO_KMH,
            condition_code: city.code.to_string(),
            description: city.description.to_string(),
            observed_at: Utc::now(),
        })
    }

    async fn forecast_samples(
        &self,
        _query: &LocationQuery,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let now = Utc::now();
        Ok(DEMO_FORECAST
            .iter()
            .map(|&(offset, temperature, code, description)| ForecastSample {
                timestamp: now + Duration::days(offset),
                temperature_celsius: temperature,
                condition_code: code.to_string(),
                description: description.to_string(),
            })
            .collect())
    }
}
