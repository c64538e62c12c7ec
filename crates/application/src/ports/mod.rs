//! Port definitions for the application layer
//!
//! Ports are the interfaces the application uses to reach external systems.
//! Adapters in the integration crates implement them.

mod weather_port;

#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{CurrentConditions, LocationQuery, WeatherPort};
