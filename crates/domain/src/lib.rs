//! Domain layer for Weatherdeck
//!
//! Contains the forecast aggregation core, value objects, and domain errors.
//! This layer is pure: no I/O, no ambient state, no async.

pub mod errors;
pub mod forecast;
pub mod value_objects;

pub use errors::DomainError;
pub use forecast::{DaySummary, ForecastSample, aggregate_daily};
pub use value_objects::*;
