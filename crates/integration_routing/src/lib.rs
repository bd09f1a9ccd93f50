//! Routing and geocoding integration for EcoTrajet
//!
//! Provides road-network routing via the public
//! [OSRM](https://project-osrm.org) HTTP API and place-name geocoding via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Architecture
//!
//! [`OsrmRoutingClient`] implements the application's `RoutingPort` and
//! [`NominatimGeocodingClient`] its `GeocodingPort`; the route-estimation
//! engine stays unaware of the concrete HTTP services behind them.

mod client;
mod config;
mod error;
mod geocoding;

pub use client::OsrmRoutingClient;
pub use config::{NominatimConfig, RoutingConfig};
pub use error::{GeocodingError, RoutingError};
pub use geocoding::NominatimGeocodingClient;
