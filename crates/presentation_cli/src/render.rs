//! Terminal rendering for the dashboard
//!
//! Maps provider condition codes to glyphs through a fixed lookup table and
//! lays out the current-conditions panel plus the five-day grid.

use application::{Dashboard, ForecastState};

/// Glyph for an OpenWeatherMap condition code
///
/// Unrecognized codes fall back to the plain cloud, so a new code on the
/// provider side degrades gracefully instead of breaking the layout.
pub fn icon_glyph(code: &str) -> &'static str {
    match code {
        "01d" => "☀️",  // clear sky day
        "01n" => "🌙", // clear sky night
        "02d" => "🌤️",  // few clouds day
        "02n" => "☁️",  // few clouds night
        "03d" | "03n" => "🌥️", // scattered clouds
        "04d" | "04n" => "☁️",  // broken clouds
        "09d" | "09n" => "🌧️", // shower rain
        "10d" => "🌦️", // rain day
        "10n" => "🌧️", // rain night
        "11d" | "11n" => "⛈️",  // thunderstorm
        "13d" | "13n" => "❄️",  // snow
        "50d" | "50n" => "🌫️", // mist
        _ => "☁️",
    }
}

#[allow(clippy::cast_possible_truncation)] // rounded display values fit i32
fn round(value: f64) -> i32 {
    value.round() as i32
}

/// Render the full dashboard to a printable string
#[must_use]
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let current = &dashboard.current;
    let mut out = String::new();

    out.push_str(&format!("{}, {}\n", current.city, current.country));
    out.push_str(&format!("{}\n\n", dashboard.date_line));

    out.push_str(&format!(
        "{}  {}°C  {}\n",
        icon_glyph(&current.condition_code),
        round(current.temperature_celsius),
        current.description
    ));
    out.push_str(&format!(
        "Wind {} km/h | Humidity {}% | Feels like {}°C | Pressure {} hPa\n\n",
        round(current.wind_speed_kmh),
        current.humidity_percent,
        round(current.feels_like_celsius),
        current.pressure_hpa
    ));

    out.push_str("5-day forecast\n");
    match &dashboard.forecast {
        ForecastState::NoData => out.push_str("No forecast data available.\n"),
        ForecastState::Days(days) => {
            for day in days {
                out.push_str(&format!(
                    "{:<4} {}  {:<20} {:>3}° / {}°\n",
                    day.day_label,
                    icon_glyph(&day.representative_code),
                    day.representative_description,
                    day.high_celsius,
                    day.low_celsius
                ));
            }
        },
    }

    out
}
