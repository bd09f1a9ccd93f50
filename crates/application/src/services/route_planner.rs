//! Multimodal route estimation
//!
//! Builds the six synthetic route scenarios for one departure/destination
//! pair: car-only, train-only, bus-only, bike-only, walk-only and
//! bus+plane+bus. Each scenario assembles an ordered list of legs annotated
//! with distance, duration, CO₂ and (when the routing service cooperates)
//! real path geometry, then the set is ranked and deduplicated.
//!
//! Only the car scenario depends on the routing service succeeding; every
//! other leg degrades to a straight-line great-circle estimate when its
//! fetch fails.

use std::sync::Arc;

use domain::{GeoLocation, TransportMode, co2_emissions_grams};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{PathGeometry, RouteStep, RoutingPort, RoutingProfile};
use crate::services::ranking::rank_routes;
use crate::services::scenario::{RouteLeg, ScenarioKind, ScenarioRoute};

/// Simulated train cruising speed
const TRAIN_SPEED_KMH: f64 = 200.0;
/// Simulated plane cruising speed
const PLANE_SPEED_KMH: f64 = 700.0;
/// Fixed duration of each walk to/from the fictitious station
const STATION_WALK_SECONDS: f64 = 900.0;
/// Fixed duration of each airport bus leg and each airport wait
const AIRPORT_TRANSFER_SECONDS: f64 = 1800.0;

/// Position of the fictitious departure station along the trip
const STATION_START_RATIO: f64 = 0.01;
/// Position of the fictitious arrival station along the trip
const STATION_END_RATIO: f64 = 0.99;
/// Position of the fictitious departure airport along the trip
const AIRPORT_START_RATIO: f64 = 0.02;
/// Position of the fictitious arrival airport along the trip
const AIRPORT_END_RATIO: f64 = 0.98;

/// Descriptor for the scenarios made of one ride over the whole trip
struct DirectScenario {
    kind: ScenarioKind,
    mode: TransportMode,
    speed_kmh: f64,
    verb: &'static str,
}

const DIRECT_SCENARIOS: [DirectScenario; 3] = [
    DirectScenario {
        kind: ScenarioKind::Bus,
        mode: TransportMode::Bus,
        speed_kmh: 60.0,
        verb: "Bus ride",
    },
    DirectScenario {
        kind: ScenarioKind::Bike,
        mode: TransportMode::Bike,
        speed_kmh: 20.0,
        verb: "Bike ride",
    },
    DirectScenario {
        kind: ScenarioKind::Walk,
        mode: TransportMode::Walk,
        speed_kmh: 5.0,
        verb: "Walk",
    },
];

/// Outcome of a per-leg path lookup
///
/// Either a real routed path or the straight-line great-circle estimate
/// substituted when the routing service cannot help. Making the fallback a
/// typed result keeps the degradation policy visible to callers instead of
/// burying it in error suppression.
#[derive(Debug, Clone)]
pub enum PathEstimate {
    /// Real route returned by the routing service
    Routed {
        /// Path geometry following the road network
        geometry: Option<PathGeometry>,
        /// Routed distance in meters
        distance_meters: f64,
    },
    /// Great-circle estimate between the two endpoints
    StraightLine {
        /// Haversine distance in meters
        distance_meters: f64,
    },
}

impl PathEstimate {
    /// Distance of the estimate in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        match self {
            Self::Routed {
                distance_meters, ..
            }
            | Self::StraightLine { distance_meters } => *distance_meters,
        }
    }

    /// True when a real route backs this estimate
    #[must_use]
    pub const fn is_routed(&self) -> bool {
        matches!(self, Self::Routed { .. })
    }

    /// Consume the estimate, keeping its geometry if any
    #[must_use]
    pub fn into_geometry(self) -> Option<PathGeometry> {
        match self {
            Self::Routed { geometry, .. } => geometry,
            Self::StraightLine { .. } => None,
        }
    }
}

/// A whole-trip route with its emission estimate
///
/// Result shape of [`RoutePlanner::calculate_route`], covering the trip with
/// a single real route for one transport mode.
#[derive(Debug, Clone)]
pub struct CalculatedRoute {
    /// Route length in meters
    pub distance: f64,
    /// Travel time in seconds
    pub duration: f64,
    /// Path geometry for map display
    pub geometry: Option<PathGeometry>,
    /// CO₂ estimate in grams for the requested mode
    pub co2_emissions: u32,
    /// Ordered maneuver steps
    pub steps: Vec<RouteStep>,
}

/// Multimodal route estimation service
///
/// Scenarios are built sequentially; no state is shared between builds.
pub struct RoutePlanner {
    routing: Arc<dyn RoutingPort>,
}

impl std::fmt::Debug for RoutePlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutePlanner").finish_non_exhaustive()
    }
}

impl RoutePlanner {
    /// Create a planner backed by a routing port
    #[must_use]
    pub fn new(routing: Arc<dyn RoutingPort>) -> Self {
        Self { routing }
    }

    /// Fetch a whole-trip route for one mode and estimate its emissions
    ///
    /// # Errors
    ///
    /// Propagates routing failures, including the no-route case. This is the
    /// one call site where a routing failure is surfaced to the caller.
    #[instrument(skip(self), fields(from = %from, to = %to))]
    pub async fn calculate_route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        mode: &str,
    ) -> Result<CalculatedRoute, ApplicationError> {
        let profile = RoutingProfile::from_mode(mode);
        let path = self.routing.fetch_route(from, to, profile).await?;
        let co2_emissions = co2_emissions_grams(path.distance_meters, mode);

        Ok(CalculatedRoute {
            distance: path.distance_meters,
            duration: path.duration_seconds,
            geometry: path.geometry,
            co2_emissions,
            steps: path.steps,
        })
    }

    /// Build, rank and deduplicate the six route scenarios
    ///
    /// Returns between 3 and 6 scenarios ordered as fastest, lowest CO₂, best
    /// compromise, then the remaining base scenarios.
    ///
    /// # Errors
    ///
    /// Fails only when the mandatory whole-trip car fetch fails; per-leg
    /// fetches inside the other scenarios degrade silently to straight-line
    /// estimates.
    #[instrument(skip(self), fields(departure = %departure, destination = %destination))]
    pub async fn calculate_multimodal_routes(
        &self,
        departure: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<Vec<ScenarioRoute>, ApplicationError> {
        let station_start = departure.interpolate(destination, STATION_START_RATIO);
        let station_end = departure.interpolate(destination, STATION_END_RATIO);
        let airport_start = departure.interpolate(destination, AIRPORT_START_RATIO);
        let airport_end = departure.interpolate(destination, AIRPORT_END_RATIO);

        let mut scenarios = Vec::with_capacity(6);
        scenarios.push(self.build_car_scenario(departure, destination).await?);
        scenarios.push(
            self.build_train_scenario(departure, destination, &station_start, &station_end)
                .await,
        );
        for descriptor in &DIRECT_SCENARIOS {
            scenarios.push(
                self.build_direct_scenario(descriptor, departure, destination)
                    .await,
            );
        }
        scenarios.push(
            self.build_bus_plane_scenario(departure, destination, &airport_start, &airport_end)
                .await,
        );

        Ok(rank_routes(scenarios))
    }

    /// Path lookup with straight-line degradation
    ///
    /// Train and plane legs never consult the routing service; every other
    /// mode tries a real fetch and falls back to the haversine estimate.
    async fn path_estimate(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        mode: TransportMode,
    ) -> PathEstimate {
        if matches!(mode, TransportMode::Train | TransportMode::Plane) {
            return PathEstimate::StraightLine {
                distance_meters: from.distance_meters(to),
            };
        }

        let profile = RoutingProfile::from_mode(mode.as_str());
        match self.routing.fetch_route(from, to, profile).await {
            Ok(path) => PathEstimate::Routed {
                geometry: path.geometry,
                distance_meters: path.distance_meters,
            },
            Err(error) => {
                debug!(%error, %mode, "Leg routing failed, using straight-line estimate");
                PathEstimate::StraightLine {
                    distance_meters: from.distance_meters(to),
                }
            },
        }
    }

    /// Car-only: one real route, totals recomputed from its steps
    async fn build_car_scenario(
        &self,
        departure: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<ScenarioRoute, ApplicationError> {
        let route = self.calculate_route(departure, destination, "car").await?;

        let mut total_duration = 0.0;
        let mut total_co2: u32 = 0;
        let mut total_distance = 0.0;
        let mut steps = Vec::with_capacity(route.steps.len());
        for step in &route.steps {
            let co2 = co2_emissions_grams(step.distance_meters, "car");
            total_duration += step.duration_seconds;
            total_co2 += co2;
            total_distance += step.distance_meters;
            steps.push(RouteLeg {
                mode: TransportMode::Car,
                description: step
                    .instruction
                    .clone()
                    .unwrap_or_else(|| "Drive".to_string()),
                duration: step.duration_seconds,
                co2,
                distance: Some(step.distance_meters),
                geometry: None,
                from: None,
                to: None,
            });
        }

        // Empty or zero-valued step lists fall back to the route totals
        let kind = ScenarioKind::Car;
        Ok(ScenarioRoute {
            label: kind.label().to_string(),
            scenario: kind,
            modes: kind.modes(),
            distance: if total_distance > 0.0 {
                total_distance
            } else {
                route.distance
            },
            duration: if total_duration > 0.0 {
                total_duration
            } else {
                route.duration
            },
            geometry: route.geometry,
            co2_emissions: if total_co2 > 0 {
                total_co2
            } else {
                route.co2_emissions
            },
            steps,
            score: None,
        })
    }

    /// Train-only: always simulated, no real route for the ride itself
    async fn build_train_scenario(
        &self,
        departure: &GeoLocation,
        destination: &GeoLocation,
        station_start: &GeoLocation,
        station_end: &GeoLocation,
    ) -> ScenarioRoute {
        let ride_km = departure.distance_km(destination);
        let ride_duration = travel_seconds(ride_km * 1000.0, TRAIN_SPEED_KMH);
        let ride_co2 = co2_emissions_grams(ride_km * 1000.0, "train");

        let access = self
            .path_estimate(departure, station_start, TransportMode::Walk)
            .await;
        let ride = self
            .path_estimate(station_start, station_end, TransportMode::Train)
            .await;
        let egress = self
            .path_estimate(station_end, destination, TransportMode::Walk)
            .await;

        let steps = vec![
            RouteLeg {
                mode: TransportMode::Walk,
                description: "Walk to the train station".to_string(),
                duration: STATION_WALK_SECONDS,
                co2: co2_emissions_grams(access.distance_meters(), "walk"),
                distance: Some(access.distance_meters()),
                geometry: access.into_geometry(),
                from: Some(*departure),
                to: Some(*station_start),
            },
            RouteLeg {
                mode: TransportMode::Train,
                description: format!("Train ride ({ride_km:.1} km)"),
                duration: ride_duration,
                co2: ride_co2,
                distance: Some(ride.distance_meters()),
                geometry: None,
                from: Some(*station_start),
                to: Some(*station_end),
            },
            RouteLeg {
                mode: TransportMode::Walk,
                description: "Walk from the train station to your destination".to_string(),
                duration: STATION_WALK_SECONDS,
                co2: co2_emissions_grams(egress.distance_meters(), "walk"),
                distance: Some(egress.distance_meters()),
                geometry: egress.into_geometry(),
                from: Some(*station_end),
                to: Some(*destination),
            },
        ];

        let kind = ScenarioKind::Train;
        ScenarioRoute {
            label: kind.label().to_string(),
            scenario: kind,
            modes: kind.modes(),
            distance: ride_km * 1000.0,
            duration: ride_duration + 2.0 * STATION_WALK_SECONDS,
            geometry: None,
            co2_emissions: ride_co2,
            steps,
            score: None,
        }
    }

    /// One ride covering the whole trip at a fixed average speed
    async fn build_direct_scenario(
        &self,
        descriptor: &DirectScenario,
        departure: &GeoLocation,
        destination: &GeoLocation,
    ) -> ScenarioRoute {
        let estimate = self
            .path_estimate(departure, destination, descriptor.mode)
            .await;
        let distance = estimate.distance_meters();
        let duration = travel_seconds(distance, descriptor.speed_kmh);
        let co2 = co2_emissions_grams(distance, descriptor.mode.as_str());

        let steps = vec![RouteLeg {
            mode: descriptor.mode,
            description: format!("{} ({:.1} km)", descriptor.verb, distance / 1000.0),
            duration,
            co2,
            distance: Some(distance),
            geometry: estimate.into_geometry(),
            from: Some(*departure),
            to: Some(*destination),
        }];

        ScenarioRoute {
            label: descriptor.kind.label().to_string(),
            scenario: descriptor.kind,
            modes: descriptor.kind.modes(),
            distance,
            duration,
            geometry: None,
            co2_emissions: co2,
            steps,
            score: None,
        }
    }

    /// Bus to the airport, flight, bus to the destination
    async fn build_bus_plane_scenario(
        &self,
        departure: &GeoLocation,
        destination: &GeoLocation,
        airport_start: &GeoLocation,
        airport_end: &GeoLocation,
    ) -> ScenarioRoute {
        let access = self
            .path_estimate(departure, airport_start, TransportMode::Bus)
            .await;
        let flight_km = airport_start.distance_km(airport_end);
        let flight_duration = travel_seconds(flight_km * 1000.0, PLANE_SPEED_KMH);
        let flight_co2 = co2_emissions_grams(flight_km * 1000.0, "plane");
        let egress = self
            .path_estimate(airport_end, destination, TransportMode::Bus)
            .await;

        let access_co2 = co2_emissions_grams(access.distance_meters(), "bus");
        let egress_co2 = co2_emissions_grams(egress.distance_meters(), "bus");
        let access_distance = access.distance_meters();
        let egress_distance = egress.distance_meters();

        let steps = vec![
            RouteLeg {
                mode: TransportMode::Bus,
                description: "Bus to the airport".to_string(),
                duration: AIRPORT_TRANSFER_SECONDS,
                co2: access_co2,
                distance: Some(access_distance),
                geometry: access.into_geometry(),
                from: Some(*departure),
                to: Some(*airport_start),
            },
            RouteLeg::waiting("Waiting at the airport", AIRPORT_TRANSFER_SECONDS),
            RouteLeg {
                mode: TransportMode::Plane,
                description: format!("Flight ({flight_km:.1} km)"),
                duration: flight_duration,
                co2: flight_co2,
                distance: Some(flight_km * 1000.0),
                geometry: None,
                from: Some(*airport_start),
                to: Some(*airport_end),
            },
            RouteLeg::waiting("Waiting at arrival airport", AIRPORT_TRANSFER_SECONDS),
            RouteLeg {
                mode: TransportMode::Bus,
                description: "Bus from the airport to your destination".to_string(),
                duration: AIRPORT_TRANSFER_SECONDS,
                co2: egress_co2,
                distance: Some(egress_distance),
                geometry: egress.into_geometry(),
                from: Some(*airport_end),
                to: Some(*destination),
            },
        ];

        let kind = ScenarioKind::BusPlaneBus;
        ScenarioRoute {
            label: kind.label().to_string(),
            scenario: kind,
            modes: kind.modes(),
            distance: access_distance + flight_km * 1000.0 + egress_distance,
            duration: flight_duration + 4.0 * AIRPORT_TRANSFER_SECONDS,
            geometry: None,
            co2_emissions: flight_co2 + access_co2 + egress_co2,
            steps,
            score: None,
        }
    }
}

/// Travel time in seconds for a distance at a fixed average speed
fn travel_seconds(distance_meters: f64, speed_kmh: f64) -> f64 {
    distance_meters / (speed_kmh * 1000.0) * 3600.0
}
