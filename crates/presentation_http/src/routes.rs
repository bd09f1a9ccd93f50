//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Route comparison API
        .route("/api/routes", post(handlers::routes::compare_routes))
        // Geocoding API
        .route("/api/geocode", get(handlers::geocode::geocode_place))
        // Attach state
        .with_state(state)
}
