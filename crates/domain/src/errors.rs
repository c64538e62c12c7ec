//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude out of range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Timezone name not found in the IANA database
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}
