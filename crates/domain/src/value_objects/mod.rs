//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod transport_mode;

pub use geo_location::GeoLocation;
pub use transport_mode::TransportMode;
