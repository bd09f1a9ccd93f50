//! Scenario data model
//!
//! Typed representation of the synthetic route scenarios produced by the
//! estimation engine. The serde field names stay compatible with the web
//! client payload (`distance`, `duration`, `co2Emissions`, `steps`).

use std::fmt;

use domain::{GeoLocation, TransportMode};
use serde::{Deserialize, Serialize};

use crate::ports::PathGeometry;

/// One fixed transportation strategy evaluated end-to-end between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Drive the whole trip
    #[serde(rename = "car")]
    Car,
    /// Walk to a station, ride a train, walk to the destination
    #[serde(rename = "train")]
    Train,
    /// Single bus ride over the whole trip
    #[serde(rename = "bus")]
    Bus,
    /// Cycle the whole trip
    #[serde(rename = "bike")]
    Bike,
    /// Walk the whole trip
    #[serde(rename = "walk")]
    Walk,
    /// Bus to the airport, fly, bus to the destination
    #[serde(rename = "bus+plane+bus")]
    BusPlaneBus,
}

impl ScenarioKind {
    /// All scenarios, in canonical presentation order
    pub const ALL: [Self; 6] = [
        Self::Car,
        Self::Train,
        Self::Bus,
        Self::Bike,
        Self::Walk,
        Self::BusPlaneBus,
    ];

    /// Display label shown to the user
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Car => "Car only",
            Self::Train => "Train only",
            Self::Bus => "Bus only",
            Self::Bike => "Bike only",
            Self::Walk => "Walk only",
            Self::BusPlaneBus => "Bus + Plane + Bus",
        }
    }

    /// Ordered transport modes composing the scenario
    #[must_use]
    pub fn modes(&self) -> Vec<TransportMode> {
        match self {
            Self::Car => vec![TransportMode::Car],
            Self::Train => vec![
                TransportMode::Walk,
                TransportMode::Train,
                TransportMode::Walk,
            ],
            Self::Bus => vec![TransportMode::Bus],
            Self::Bike => vec![TransportMode::Bike],
            Self::Walk => vec![TransportMode::Walk],
            Self::BusPlaneBus => vec![
                TransportMode::Bus,
                TransportMode::Plane,
                TransportMode::Bus,
            ],
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One homogeneous-mode segment of a scenario itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Transport mode of this leg
    pub mode: TransportMode,
    /// Human-readable step description
    pub description: String,
    /// Leg duration in seconds
    pub duration: f64,
    /// Leg CO₂ emissions in grams
    pub co2: u32,
    /// Leg length in meters (absent for stationary legs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Real path geometry, if the routing service provided one; callers fall
    /// back to a straight line between `from` and `to` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PathGeometry>,
    /// Leg start coordinate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<GeoLocation>,
    /// Leg end coordinate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<GeoLocation>,
}

impl RouteLeg {
    /// A stationary waiting leg, contributing zero CO₂ and no motion
    #[must_use]
    pub fn waiting(description: impl Into<String>, duration_seconds: f64) -> Self {
        Self {
            mode: TransportMode::Wait,
            description: description.into(),
            duration: duration_seconds,
            co2: 0,
            distance: None,
            geometry: None,
            from: None,
            to: None,
        }
    }
}

/// A fully evaluated scenario between two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRoute {
    /// Display label
    pub label: String,
    /// Scenario tag
    pub scenario: ScenarioKind,
    /// Ordered transport modes
    pub modes: Vec<TransportMode>,
    /// Total distance in meters
    pub distance: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Whole-route geometry, when a single real route covers the trip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PathGeometry>,
    /// Total CO₂ emissions in grams
    pub co2_emissions: u32,
    /// Ordered itinerary legs
    pub steps: Vec<RouteLeg>,
    /// Normalized compromise score, set on the compromise selection only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ScenarioRoute {
    /// Composite identity used for result deduplication
    #[must_use]
    pub fn dedup_key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.label, self.distance, self.duration, self.co2_emissions
        )
    }
}
