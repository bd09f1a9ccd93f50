//! Application state shared across handlers

use std::sync::Arc;

use application::{GeocodingPort, RoutePlanner};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Route planner producing the scenario comparison
    pub planner: Arc<RoutePlanner>,
    /// Geocoding port for place name resolution
    pub geocoding: Arc<dyn GeocodingPort>,
}
