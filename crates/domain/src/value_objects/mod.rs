//! Value objects for the weather domain

mod geo_location;
mod timezone;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use timezone::Timezone;
