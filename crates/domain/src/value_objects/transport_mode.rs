//! Transport mode vocabulary

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport mode of a single itinerary leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// On foot
    Walk,
    /// Private car
    Car,
    /// Bus (thermal)
    Bus,
    /// Train (high-speed average)
    Train,
    /// Plane (short/medium haul)
    Plane,
    /// Bicycle
    Bike,
    /// Waiting, no motion (airport transfer, boarding)
    Wait,
}

impl TransportMode {
    /// Lowercase tag as used in emission lookups and API payloads
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Plane => "plane",
            Self::Bike => "bike",
            Self::Wait => "wait",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Walk => "Walk",
            Self::Car => "Car",
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Plane => "Plane",
            Self::Bike => "Bike",
            Self::Wait => "Wait",
        }
    }

    /// True for modes that do not move the traveller by themselves
    #[must_use]
    pub const fn is_stationary(&self) -> bool {
        matches!(self, Self::Wait)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
