//! Dashboard assembly service
//!
//! Fetches current conditions and the forecast feed through the weather
//! port, runs the daily aggregation, and produces the view the presentation
//! layer renders. "Today" is derived from the configured consumer timezone,
//! never from ambient process state.

use chrono::{DateTime, Utc};
use domain::{DaySummary, ForecastSample, Timezone, aggregate_daily};
use serde::Serialize;
use tracing::debug;

use crate::error::ApplicationError;
use crate::ports::{CurrentConditions, LocationQuery, WeatherPort};

/// Aggregated forecast portion of the dashboard
///
/// An empty feed is a renderable state of its own, not an error: the
/// presentation layer must show an explicit "no data" message instead of an
/// empty grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ForecastState {
    /// The provider returned no usable future-day samples
    NoData,
    /// Up to five day summaries, chronologically ordered
    Days(Vec<DaySummary>),
}

impl ForecastState {
    /// The day summaries, empty when there is no data
    #[must_use]
    pub fn days(&self) -> &[DaySummary] {
        match self {
            Self::NoData => &[],
            Self::Days(days) => days,
        }
    }
}

/// Everything the presentation layer needs to draw one dashboard
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// When the dashboard was assembled
    pub generated_at: DateTime<Utc>,
    /// Long-form current date in the consumer timezone
    /// (e.g. "Sunday, 23 August 2026")
    pub date_line: String,
    /// Current conditions panel
    pub current: CurrentConditions,
    /// Aggregated multi-day forecast
    pub forecast: ForecastState,
}

/// Builds dashboards for a fixed consumer timezone
#[derive(Debug, Clone)]
pub struct DashboardService {
    timezone: Timezone,
}

impl DashboardService {
    /// Create a service for the given consumer timezone
    #[must_use]
    pub const fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    /// The configured consumer timezone
    #[must_use]
    pub const fn timezone(&self) -> &Timezone {
        &self.timezone
    }

    /// Fetch weather data through the port and assemble a dashboard
    pub async fn build(
        &self,
        provider: &dyn WeatherPort,
        query: &LocationQuery,
    ) -> Result<Dashboard, ApplicationError> {
        let current = provider.current_conditions(query).await?;
        let samples = provider.forecast_samples(query).await?;
        debug!(
            city = %current.city,
            samples = samples.len(),
            "assembling dashboard"
        );
        Ok(self.assemble(current, &samples, Utc::now()))
    }

    /// Pure assembly step, separated from I/O so it can be tested directly
    fn assemble(
        &self,
        current: CurrentConditions,
        samples: &[ForecastSample],
        now: DateTime<Utc>,
    ) -> Dashboard {
        let local_now = now.with_timezone(&self.timezone.tz());
        let today = local_now.date_naive();

        let days = aggregate_daily(samples, &self.timezone, today);
        let forecast = if days.is_empty() {
            ForecastState::NoData
        } else {
            ForecastState::Days(days)
        };

        Dashboard {
            generated_at: now,
            date_line: local_now.format("%A, %-d %B %Y").to_string(),
            current,
            forecast,
        }
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(Timezone::utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockWeatherPort;
    use chrono::TimeZone;
    use domain::GeoLocation;

    fn current_fixture() -> CurrentConditions {
        CurrentConditions {
            city: "Johannesburg".to_string(),
            country: "ZA".to_string(),
            temperature_celsius: 24.0,
            feels_like_celsius: 25.0,
            humidity_percent: 45,
            pressure_hpa: 1013,
            wind_speed_kmh: 11.9,
            condition_code: "01d".to_string(),
            description: "Sunny".to_string(),
            observed_at: Utc.with_ymd_and_hms(2026, 8, 10, 12, 0, 0).unwrap(),
        }
    }

    fn sample(day: u32, temp: f64, code: &str, desc: &str) -> ForecastSample {
        ForecastSample {
            timestamp: Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap(),
            temperature_celsius: temp,
            condition_code: code.to_string(),
            description: desc.to_string(),
        }
    }

    fn now_fixture() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 10, 9, 30, 0).unwrap()
    }

    #[test]
    fn assemble_produces_day_summaries_without_today() {
        let service = DashboardService::default();
        let samples = vec![
            sample(10, 20.0, "01d", "clear sky"),
            sample(11, 22.0, "02d", "few clouds"),
            sample(12, 18.0, "10d", "light rain"),
        ];

        let dashboard = service.assemble(current_fixture(), &samples, now_fixture());

        let days = dashboard.forecast.days();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].representative_code, "02d");
        assert_eq!(days[1].representative_code, "10d");
    }

    #[test]
    fn assemble_flags_empty_feed_as_no_data() {
        let service = DashboardService::default();
        let dashboard = service.assemble(current_fixture(), &[], now_fixture());
        assert_eq!(dashboard.forecast, ForecastState::NoData);
        assert!(dashboard.forecast.days().is_empty());
    }

    #[test]
    fn assemble_flags_today_only_feed_as_no_data() {
        let service = DashboardService::default();
        let samples = vec![sample(10, 20.0, "01d", "clear sky")];
        let dashboard = service.assemble(current_fixture(), &samples, now_fixture());
        assert_eq!(dashboard.forecast, ForecastState::NoData);
    }

    #[test]
    fn date_line_is_long_form_in_consumer_timezone() {
        // 2026-08-10 23:30 UTC is already Tuesday the 11th in Johannesburg
        let tz = Timezone::parse("Africa/Johannesburg").unwrap();
        let service = DashboardService::new(tz);
        let late_utc = Utc.with_ymd_and_hms(2026, 8, 10, 23, 30, 0).unwrap();

        let dashboard = service.assemble(current_fixture(), &[], late_utc);
        assert_eq!(dashboard.date_line, "Tuesday, 11 August 2026");
    }

    #[tokio::test]
    async fn build_queries_the_port_and_assembles() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .times(1)
            .returning(|_| Ok(current_fixture()));
        port.expect_forecast_samples()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = DashboardService::default();
        let query = LocationQuery::City("Johannesburg".to_string());
        let dashboard = service.build(&port, &query).await.unwrap();

        assert_eq!(dashboard.current.city, "Johannesburg");
        assert_eq!(dashboard.forecast, ForecastState::NoData);
    }

    #[tokio::test]
    async fn build_propagates_provider_errors() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .returning(|_| Err(ApplicationError::CityNotFound("Gotham".to_string())));

        let service = DashboardService::default();
        let query = LocationQuery::City("Gotham".to_string());
        let err = service.build(&port, &query).await.unwrap_err();

        assert!(matches!(err, ApplicationError::CityNotFound(_)));
    }

    #[tokio::test]
    async fn build_accepts_coordinate_queries() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .returning(|_| Ok(current_fixture()));
        port.expect_forecast_samples()
            .returning(|_| Ok(vec![sample(11, 21.0, "01d", "clear sky")]));

        let service = DashboardService::default();
        let location = GeoLocation::new(-26.2041, 28.0473).unwrap();
        let query = LocationQuery::Coordinates(location);
        let dashboard = service.build(&port, &query).await.unwrap();

        assert_eq!(dashboard.forecast.days().len(), 1);
    }
}
