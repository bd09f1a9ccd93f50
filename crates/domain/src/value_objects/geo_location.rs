//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geographic location with latitude and longitude (WGS84 degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCoordinates`] if latitude is not in
    /// [-90, 90] or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates(format!(
                "latitude {latitude}, longitude {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another location in kilometers
    ///
    /// Uses the Haversine formula with Earth radius 6371 km.
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.latitude.to_radians();
        let lat2_rad = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
            (delta_lon / 2.0).sin().powi(2),
            (delta_lat / 2.0).sin().powi(2),
        );
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Great-circle distance to another location in meters
    #[must_use]
    pub fn distance_meters(&self, other: &Self) -> f64 {
        self.distance_km(other) * 1000.0
    }

    /// Linear interpolation between this location and another
    ///
    /// Applied independently to latitude and longitude, so this is *not*
    /// geodesic. Used for placing fictitious stations and airports at small
    /// ratios along a trip, where the approximation is acceptable.
    #[must_use]
    pub fn interpolate(&self, other: &Self, ratio: f64) -> Self {
        Self {
            latitude: (other.latitude - self.latitude).mul_add(ratio, self.latitude),
            longitude: (other.longitude - self.longitude).mul_add(ratio, self.longitude),
        }
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Common locations for defaults and tests
impl GeoLocation {
    /// Paris, France
    #[must_use]
    pub const fn paris() -> Self {
        Self::new_unchecked(48.8566, 2.3522)
    }

    /// Lyon, France
    #[must_use]
    pub const fn lyon() -> Self {
        Self::new_unchecked(45.75, 4.85)
    }

    /// Marseille, France
    #[must_use]
    pub const fn marseille() -> Self {
        Self::new_unchecked(43.2965, 5.3698)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(45.75, 4.85).expect("valid coordinates");
        assert!((loc.latitude() - 45.75).abs() < f64::EPSILON);
        assert!((loc.longitude() - 4.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_invalid_coordinates_error_names_the_values() {
        let err = GeoLocation::new(95.0, 200.0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCoordinates(_)));
        let msg = err.to_string();
        assert!(msg.contains("95"));
        assert!(msg.contains("200"));
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(45.75, 4.85).expect("valid");
        let display = format!("{loc}");
        assert!(display.contains("45.75"));
        assert!(display.contains("4.85"));
    }

    #[test]
    fn test_distance_same_location() {
        let loc = GeoLocation::lyon();
        assert!(loc.distance_km(&loc).abs() < 1e-9);
    }

    #[test]
    fn test_distance_paris_lyon() {
        let distance = GeoLocation::paris().distance_km(&GeoLocation::lyon());
        // Paris to Lyon is approximately 390km
        assert!((distance - 390.0).abs() < 20.0);
    }

    #[test]
    fn test_distance_meters() {
        let km = GeoLocation::paris().distance_km(&GeoLocation::lyon());
        let m = GeoLocation::paris().distance_meters(&GeoLocation::lyon());
        assert!((m - km * 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_interpolate_endpoints() {
        let a = GeoLocation::paris();
        let b = GeoLocation::marseille();
        assert_eq!(a.interpolate(&b, 0.0), a);
        let end = a.interpolate(&b, 1.0);
        assert!((end.latitude() - b.latitude()).abs() < 1e-12);
        assert!((end.longitude() - b.longitude()).abs() < 1e-12);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let a = GeoLocation::new_unchecked(40.0, 0.0);
        let b = GeoLocation::new_unchecked(50.0, 10.0);
        let mid = a.interpolate(&b, 0.5);
        assert!((mid.latitude() - 45.0).abs() < 1e-12);
        assert!((mid.longitude() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let loc = GeoLocation::new(45.75, 4.85).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("45.75"));
        assert!(json.contains("4.85"));

        let deserialized: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let a = GeoLocation::new_unchecked(lat1, lon1);
            let b = GeoLocation::new_unchecked(lat2, lon2);
            let ab = a.distance_km(&b);
            let ba = b.distance_km(&a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        #[test]
        fn distance_is_non_negative(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let a = GeoLocation::new_unchecked(lat1, lon1);
            let b = GeoLocation::new_unchecked(lat2, lon2);
            prop_assert!(a.distance_km(&b) >= 0.0);
        }

        #[test]
        fn self_distance_is_zero(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let p = GeoLocation::new_unchecked(lat, lon);
            prop_assert!(p.distance_km(&p).abs() < 1e-9);
        }
    }
}
