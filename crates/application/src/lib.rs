//! Application layer - use cases and port definitions
//!
//! Orchestrates the domain aggregator and the weather provider port into the
//! dashboard view consumed by the presentation layer.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
