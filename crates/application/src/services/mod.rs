//! Application services

mod ranking;
mod route_planner;
mod scenario;

pub use ranking::rank_routes;
pub use route_planner::{CalculatedRoute, PathEstimate, RoutePlanner};
pub use scenario::{RouteLeg, ScenarioKind, ScenarioRoute};
