//! Geocoding service port
//!
//! Converts free-form place names to coordinates. Implemented by the
//! integration layer against a place-lookup API.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place-name geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a free-text place name to coordinates
    ///
    /// Uses the first candidate returned by the lookup service. Fails with
    /// [`ApplicationError::NoGeocodeResult`] when nothing matches.
    async fn geocode(&self, place: &str) -> Result<GeoLocation, ApplicationError>;
}
