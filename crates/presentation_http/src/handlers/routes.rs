//! Route comparison handler

use application::{ApplicationError, ScenarioRoute};
use axum::{Json, extract::State};
use domain::GeoLocation;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// A coordinate pair in a request body
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordinateBody {
    pub latitude: f64,
    pub longitude: f64,
}

impl CoordinateBody {
    fn into_location(self) -> Result<GeoLocation, ApiError> {
        GeoLocation::new(self.latitude, self.longitude)
            .map_err(|e| ApplicationError::from(e).into())
    }
}

/// Route comparison request body
#[derive(Debug, Deserialize)]
pub struct CompareRoutesRequest {
    pub departure: CoordinateBody,
    pub destination: CoordinateBody,
}

/// Compare transport scenarios between two points
///
/// Returns the ranked scenario list: fastest first, then lowest CO₂, then
/// the best compromise, then the remaining scenarios.
#[instrument(skip(state, request))]
pub async fn compare_routes(
    State(state): State<AppState>,
    Json(request): Json<CompareRoutesRequest>,
) -> Result<Json<Vec<ScenarioRoute>>, ApiError> {
    let departure = request.departure.into_location()?;
    let destination = request.destination.into_location()?;

    let routes = state
        .planner
        .calculate_multimodal_routes(&departure, &destination)
        .await?;

    Ok(Json(routes))
}
