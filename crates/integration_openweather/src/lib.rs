//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap `/data/2.5` API (current weather and the
//! 3-hour-step forecast feed), plus a demo provider with canned data for
//! running the dashboard without an API key.

pub mod client;
pub mod demo;
mod models;

pub use client::{OpenWeatherClient, OpenWeatherConfig, OpenWeatherError};
pub use demo::DemoWeatherProvider;
