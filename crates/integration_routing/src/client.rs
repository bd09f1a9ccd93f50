//! OSRM routing client
//!
//! Fetches real road-network routes from the public
//! [OSRM](https://router.project-osrm.org) HTTP API. A route request carries
//! coordinates as `lng,lat;lng,lat` and a profile (`car`, `bike`, `foot`);
//! a usable answer has `code == "Ok"` and at least one route.

use std::time::Duration;

use application::{ApplicationError, PathGeometry, RouteStep, RoutedPath, RoutingPort, RoutingProfile};
use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::RoutingConfig;
use crate::error::RoutingError;

/// OSRM-based routing client
#[derive(Debug)]
pub struct OsrmRoutingClient {
    client: Client,
    config: RoutingConfig,
}

impl OsrmRoutingClient {
    /// Create a new OSRM routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Fetch a route between two points for a routing profile
    ///
    /// # Errors
    ///
    /// Fails on network/HTTP errors and when the service answers without a
    /// usable route ([`RoutingError::NoRouteFound`]).
    #[instrument(skip(self), fields(from = %from, to = %to, profile = profile.as_str()))]
    pub async fn route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        profile: RoutingProfile,
    ) -> Result<RoutedPath, RoutingError> {
        let url = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.config.base_url,
            profile.as_str(),
            from.longitude(),
            from.latitude(),
            to.longitude(),
            to.latitude(),
        );

        let params = [
            ("overview", "full"),
            ("geometries", "geojson"),
            ("steps", "true"),
        ];

        debug!(?url, "Fetching route");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RoutingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let path = Self::parse_route_response(&body)?;
        debug!(
            distance_meters = path.distance_meters,
            duration_seconds = path.duration_seconds,
            steps = path.steps.len(),
            "Route fetched"
        );
        Ok(path)
    }

    /// Parse the raw OSRM JSON response into a typed route
    fn parse_route_response(body: &str) -> Result<RoutedPath, RoutingError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        if raw.code != "Ok" {
            return Err(RoutingError::NoRouteFound);
        }
        let Some(route) = raw.routes.into_iter().next() else {
            return Err(RoutingError::NoRouteFound);
        };

        // OSRM nests steps one level down; a two-point request has one leg
        let steps = route
            .legs
            .into_iter()
            .next()
            .map(|leg| leg.steps.into_iter().map(Self::convert_step).collect())
            .unwrap_or_default();

        Ok(RoutedPath {
            geometry: route.geometry,
            distance_meters: route.distance,
            duration_seconds: route.duration,
            steps,
        })
    }

    fn convert_step(raw: RawStep) -> RouteStep {
        let instruction = raw.name.filter(|name| !name.is_empty());
        RouteStep {
            distance_meters: raw.distance,
            duration_seconds: raw.duration,
            instruction,
        }
    }
}

#[async_trait]
impl RoutingPort for OsrmRoutingClient {
    async fn fetch_route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        profile: RoutingProfile,
    ) -> Result<RoutedPath, ApplicationError> {
        self.route(from, to, profile).await.map_err(|e| match e {
            RoutingError::NoRouteFound => ApplicationError::NoRouteFound,
            other => ApplicationError::ExternalService(other.to_string()),
        })
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    geometry: Option<PathGeometry>,
    distance: f64,
    duration: f64,
    #[serde(default)]
    legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
struct RawLeg {
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    distance: f64,
    duration: f64,
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ROUTE: &str = r#"{
        "code": "Ok",
        "routes": [{
            "geometry": {
                "type": "LineString",
                "coordinates": [[4.85, 45.75], [4.86, 45.76]]
            },
            "distance": 10000.0,
            "duration": 1200.0,
            "legs": [{
                "steps": [
                    { "distance": 1000.0, "duration": 120.0, "name": "Rue de la République" },
                    { "distance": 9000.0, "duration": 1080.0, "name": "" }
                ]
            }]
        }]
    }"#;

    #[test]
    fn test_parse_route_response() {
        let path = OsrmRoutingClient::parse_route_response(SAMPLE_ROUTE).unwrap();
        assert!((path.distance_meters - 10_000.0).abs() < f64::EPSILON);
        assert!((path.duration_seconds - 1200.0).abs() < f64::EPSILON);
        assert_eq!(path.steps.len(), 2);
        assert_eq!(
            path.steps[0].instruction.as_deref(),
            Some("Rue de la République")
        );
        // empty street names carry no instruction
        assert!(path.steps[1].instruction.is_none());
        assert_eq!(path.geometry.unwrap().coordinates.len(), 2);
    }

    #[test]
    fn test_parse_non_ok_code() {
        let body = r#"{ "code": "NoRoute", "routes": [] }"#;
        let err = OsrmRoutingClient::parse_route_response(body).unwrap_err();
        assert!(matches!(err, RoutingError::NoRouteFound));
    }

    #[test]
    fn test_parse_empty_routes() {
        let body = r#"{ "code": "Ok", "routes": [] }"#;
        let err = OsrmRoutingClient::parse_route_response(body).unwrap_err();
        assert!(matches!(err, RoutingError::NoRouteFound));
    }

    #[test]
    fn test_parse_route_without_legs() {
        let body = r#"{
            "code": "Ok",
            "routes": [{ "geometry": null, "distance": 500.0, "duration": 60.0 }]
        }"#;
        let path = OsrmRoutingClient::parse_route_response(body).unwrap();
        assert!(path.steps.is_empty());
        assert!(path.geometry.is_none());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = OsrmRoutingClient::parse_route_response("not json").unwrap_err();
        assert!(matches!(err, RoutingError::ParseError(_)));
    }
}
