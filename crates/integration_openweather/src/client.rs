//! OpenWeatherMap HTTP client
//!
//! Talks to the `/data/2.5` API with `units=metric`, so temperatures arrive
//! in Celsius and only wind speed needs normalization (done in the wire
//! models).

use application::{ApplicationError, CurrentConditions, LocationQuery, WeatherPort};
use async_trait::async_trait;
use domain::ForecastSample;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentResponse, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// No API key configured
    #[error("No API key configured")]
    MissingApiKey,

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The service rejected the API key
    #[error("API key rejected")]
    ApiKeyRejected,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<OpenWeatherError> for ApplicationError {
    fn from(err: OpenWeatherError) -> Self {
        match err {
            OpenWeatherError::CityNotFound(city) => Self::CityNotFound(city),
            OpenWeatherError::ApiKeyRejected => Self::InvalidApiKey,
            OpenWeatherError::MissingApiKey => {
                Self::Configuration("No API key configured".to_string())
            },
            OpenWeatherError::RateLimitExceeded => Self::RateLimited,
            other => Self::ExternalService(other.to_string()),
        }
    }
}

/// OpenWeatherMap client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (`appid` query parameter)
    pub api_key: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl OpenWeatherConfig {
    /// Create a configuration with defaults for the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout(),
        }
    }
}

/// OpenWeatherMap HTTP client
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` for an empty API key, or `ConnectionFailed`
    /// if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        if config.api_key.trim().is_empty() {
            return Err(OpenWeatherError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Query parameters selecting the location, by name or by coordinates
    fn location_params(query: &LocationQuery) -> Vec<(&'static str, String)> {
        match query {
            LocationQuery::City(name) => vec![("q", name.clone())],
            LocationQuery::Coordinates(location) => vec![
                ("lat", format!("{:.4}", location.latitude())),
                ("lon", format!("{:.4}", location.longitude())),
            ],
        }
    }

    /// Issue a GET against an API endpoint and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &LocationQuery,
    ) -> Result<T, OpenWeatherError> {
        let url = format!("{}/{endpoint}", self.config.base_url);
        let mut params = Self::location_params(query);
        params.push(("units", "metric".to_string()));
        params.push(("appid", self.config.api_key.clone()));

        debug!(url = %url, endpoint, "Fetching weather data");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(OpenWeatherError::ApiKeyRejected);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(OpenWeatherError::CityNotFound(query.to_string()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OpenWeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OpenWeatherError::ServiceUnavailable(format!(
                "HTTP {status}"
            )));
        }
        if !status.is_success() {
            return Err(OpenWeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherClient {
    #[instrument(skip(self), fields(query = %query))]
    async fn current_conditions(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentConditions, ApplicationError> {
        let response: CurrentResponse = self.get_json("weather", query).await?;
        Ok(response.into_conditions()?)
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn forecast_samples(
        &self,
        query: &LocationQuery,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let response: ForecastResponse = self.get_json("forecast", query).await?;
        Ok(response.into_samples()?)
    }
}
