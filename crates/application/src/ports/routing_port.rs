//! External routing service port
//!
//! Defines the interface for fetching real road-network routes between two
//! coordinate points. The integration layer implements this port against a
//! third-party routing API; the route-estimation services consume it and
//! degrade to straight-line estimates when a fetch fails.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Routing profile understood by the external routing service
///
/// Public transit has no dedicated profile; bus and train requests are
/// approximated with the car profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingProfile {
    /// Road routing for motor vehicles
    Car,
    /// Cycle routing
    Bike,
    /// Pedestrian routing
    Foot,
}

impl RoutingProfile {
    /// Profile identifier as used in routing service URLs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Foot => "foot",
        }
    }

    /// Map a free-text transport mode to the closest routing profile
    ///
    /// Bus, train and unrecognized modes fall back to the car profile.
    #[must_use]
    pub fn from_mode(mode: &str) -> Self {
        match mode.to_lowercase().as_str() {
            "bike" | "bicycle" => Self::Bike,
            "walk" | "foot" => Self::Foot,
            _ => Self::Car,
        }
    }
}

/// GeoJSON LineString geometry as returned by the routing service
///
/// Coordinates are `[longitude, latitude]` pairs, ready for map display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathGeometry {
    /// GeoJSON geometry type, always `LineString` in practice
    #[serde(rename = "type", default = "default_geometry_type")]
    pub kind: String,
    /// `[longitude, latitude]` pairs
    pub coordinates: Vec<[f64; 2]>,
}

fn default_geometry_type() -> String {
    "LineString".to_string()
}

impl PathGeometry {
    /// Create a LineString geometry from `[longitude, latitude]` pairs
    #[must_use]
    pub fn line_string(coordinates: Vec<[f64; 2]>) -> Self {
        Self {
            kind: default_geometry_type(),
            coordinates,
        }
    }
}

/// One raw step of a fetched route (a maneuver-to-maneuver segment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Step length in meters
    pub distance_meters: f64,
    /// Step travel time in seconds
    pub duration_seconds: f64,
    /// Optional turn instruction text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

/// A route fetched from the external routing service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedPath {
    /// Path geometry following the road network, if the service provided one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PathGeometry>,
    /// Total route length in meters
    pub distance_meters: f64,
    /// Total travel time in seconds
    pub duration_seconds: f64,
    /// Ordered maneuver steps (may be empty for overview-only fetches)
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

/// Port for the external routing service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Fetch a real route between two points for a routing profile
    ///
    /// Fails when the service is unreachable or answers without a usable
    /// route. Callers decide whether that failure propagates or degrades to a
    /// straight-line estimate.
    async fn fetch_route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        profile: RoutingProfile,
    ) -> Result<RoutedPath, ApplicationError>;
}
