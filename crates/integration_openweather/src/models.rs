//! Wire models for the OpenWeatherMap API
//!
//! Raw response shapes as the API returns them, with conversions into the
//! application's unit-normalized types. With `units=metric` the API already
//! reports Celsius; wind speed arrives in m/s and is converted to km/h here.

use application::CurrentConditions;
use chrono::DateTime;
use domain::ForecastSample;
use serde::Deserialize;

use crate::client::OpenWeatherError;

/// Conversion factor from m/s to km/h
pub(crate) const MPS_TO_KMH: f64 = 3.6;

/// Raw `/weather` response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentResponse {
    pub name: String,
    #[serde(default)]
    pub sys: SysInfo,
    pub main: MainReadings,
    pub weather: Vec<ConditionEntry>,
    pub wind: WindReadings,
    pub dt: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SysInfo {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ConditionEntry {
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WindReadings {
    /// Wind speed in m/s
    pub speed: f64,
}

/// Raw `/forecast` response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastEntry {
    pub dt: i64,
    pub main: ForecastReadings,
    pub weather: Vec<ConditionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastReadings {
    pub temp: f64,
}

impl CurrentResponse {
    /// Convert into the application's current-conditions DTO
    pub(crate) fn into_conditions(self) -> Result<CurrentConditions, OpenWeatherError> {
        let observed_at = DateTime::from_timestamp(self.dt, 0).ok_or_else(|| {
            OpenWeatherError::ParseError(format!("Invalid observation timestamp: {}", self.dt))
        })?;
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            OpenWeatherError::ParseError("Response carries no weather condition".to_string())
        })?;

        Ok(CurrentConditions {
            city: self.name,
            country: self.sys.country,
            temperature_celsius: self.main.temp,
            feels_like_celsius: self.main.feels_like,
            humidity_percent: self.main.humidity,
            pressure_hpa: self.main.pressure,
            wind_speed_kmh: self.wind.speed * MPS_TO_KMH,
            condition_code: condition.icon,
            description: condition.description,
            observed_at,
        })
    }
}

impl ForecastResponse {
    /// Convert the feed into chronological forecast samples
    pub(crate) fn into_samples(self) -> Result<Vec<ForecastSample>, OpenWeatherError> {
        self.list
            .into_iter()
            .map(|entry| {
                let timestamp = DateTime::from_timestamp(entry.dt, 0).ok_or_else(|| {
                    OpenWeatherError::ParseError(format!(
                        "Invalid forecast timestamp: {}",
                        entry.dt
                    ))
                })?;
                let condition = entry.weather.into_iter().next().ok_or_else(|| {
                    OpenWeatherError::ParseError(
                        "Forecast entry carries no weather condition".to_string(),
                    )
                })?;

                Ok(ForecastSample {
                    timestamp,
                    temperature_celsius: entry.main.temp,
                    condition_code: condition.icon,
                    description: condition.description,
                })
            })
            .collect()
    }
}
