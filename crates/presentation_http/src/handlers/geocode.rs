//! Geocoding handler

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Geocoding query parameters
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    /// Free-form place name
    pub q: String,
}

/// Geocoding response body
#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolve a place name to coordinates
#[instrument(skip(state))]
pub async fn geocode_place(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResponse>, ApiError> {
    if query.q.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Query parameter 'q' cannot be empty".to_string(),
        ));
    }

    let location = state.geocoding.geocode(&query.q).await?;

    Ok(Json(GeocodeResponse {
        latitude: location.latitude(),
        longitude: location.longitude(),
    }))
}
