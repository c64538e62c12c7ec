//! Weatherdeck CLI
//!
//! Terminal weather dashboard: current conditions plus a five-day forecast
//! for a city or a pair of coordinates.

#![allow(clippy::print_stdout)]

mod render;

use anyhow::Context;
use application::{DashboardService, LocationQuery, WeatherPort};
use clap::Parser;
use domain::{GeoLocation, Timezone};
use integration_openweather::{DemoWeatherProvider, OpenWeatherClient, OpenWeatherConfig};
use tracing_subscriber::EnvFilter;

/// Weatherdeck CLI
#[derive(Parser)]
#[command(name = "weatherdeck")]
#[command(author, version, about = "Terminal weather dashboard", long_about = None)]
struct Cli {
    /// City to look up
    #[arg(default_value = "Johannesburg")]
    city: String,

    /// Latitude in degrees; used together with --lon instead of the city
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// IANA timezone the forecast days are bucketed in
    #[arg(long, default_value = "UTC")]
    timezone: String,

    /// OpenWeatherMap API key; demo data is served when absent
    #[arg(long, env = "OPENWEATHER_API_KEY")]
    api_key: Option<String>,

    /// Force demo mode even when an API key is configured
    #[arg(long)]
    demo: bool,

    /// Emit the dashboard as JSON instead of rendered panels
    #[arg(long)]
    json: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn location_query(&self) -> anyhow::Result<LocationQuery> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => {
                let location = GeoLocation::new(lat, lon)?;
                Ok(LocationQuery::Coordinates(location))
            },
            _ => Ok(LocationQuery::City(self.city.clone())),
        }
    }

    fn provider(&self) -> anyhow::Result<Box<dyn WeatherPort>> {
        if self.demo {
            tracing::info!("demo mode forced, serving canned data");
            return Ok(Box::new(DemoWeatherProvider::new()));
        }
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => {
                let config = OpenWeatherConfig::with_api_key(key.clone());
                Ok(Box::new(OpenWeatherClient::new(config)?))
            },
            _ => {
                tracing::info!("no API key configured, serving canned data");
                Ok(Box::new(DemoWeatherProvider::new()))
            },
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let timezone = Timezone::parse(&cli.timezone)?;
    let query = cli.location_query()?;
    let provider = cli.provider()?;

    let service = DashboardService::new(timezone);
    let dashboard = service
        .build(provider.as_ref(), &query)
        .await
        .with_context(|| format!("Could not load weather for {query}. Please try another city"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", render::render_dashboard(&dashboard));
    }

    Ok(())
}
