//! Nominatim geocoding client
//!
//! Converts free-form place names to geographic coordinates using the
//! [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! Implements rate limiting (max 1 request/second per Nominatim usage policy)
//! and result caching (24h TTL, disabled at TTL 0) to minimize API calls.
//! Nominatim requires a client-identifying User-Agent header on every request.

use std::sync::Arc;
use std::time::Duration;

use application::{ApplicationError, GeocodingPort};
use async_trait::async_trait;
use domain::GeoLocation;
use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;

/// Nominatim-based geocoding client with rate limiting and caching
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    cache: Option<Cache<String, (f64, f64)>>,
    last_request: Arc<Mutex<Instant>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        // A zero TTL disables caching entirely
        let cache = (config.cache_ttl_hours > 0).then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(config.cache_ttl_hours * 3600))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
            last_request: Arc::new(Mutex::new(Instant::now() - Duration::from_secs(2))),
        })
    }

    /// Enforce Nominatim's rate limit (max 1 request per second)
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < Duration::from_millis(1100) {
            let wait = Duration::from_millis(1100).saturating_sub(elapsed);
            debug!(?wait, "Rate limiting geocoding request");
            tokio::time::sleep(wait).await;
        }
        *last = Instant::now();
    }

    /// Resolve a place name to coordinates
    ///
    /// Uses the first candidate of the result list.
    ///
    /// # Errors
    ///
    /// Fails on network/HTTP errors and with [`GeocodingError::NotFound`]
    /// when the service returns an empty candidate list.
    #[instrument(skip(self))]
    pub async fn lookup(&self, place: &str) -> Result<GeoLocation, GeocodingError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GeocodingError::NotFound(place.to_string()));
        }

        // Check cache first
        let cache_key = place.to_lowercase();
        if let Some(cache) = &self.cache
            && let Some((lat, lon)) = cache.get(&cache_key).await
        {
            debug!(%place, "Geocoding cache hit");
            return GeoLocation::new(lat, lon)
                .map_err(|e| GeocodingError::ParseError(e.to_string()));
        }

        self.rate_limit().await;

        let url = format!("{}/search", self.config.base_url);
        let params = [("format", "json"), ("q", place)];

        debug!(%place, "Geocoding place");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = results
            .first()
            .ok_or_else(|| GeocodingError::NotFound(place.to_string()))?;

        let lat: f64 = result
            .lat
            .parse()
            .map_err(|_| GeocodingError::ParseError("Invalid latitude".to_string()))?;
        let lon: f64 = result
            .lon
            .parse()
            .map_err(|_| GeocodingError::ParseError("Invalid longitude".to_string()))?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, (lat, lon)).await;
        }
        debug!(%place, %lat, %lon, "Geocoded place");

        GeoLocation::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingPort for NominatimGeocodingClient {
    async fn geocode(&self, place: &str) -> Result<GeoLocation, ApplicationError> {
        self.lookup(place).await.map_err(|e| match e {
            GeocodingError::NotFound(place) => ApplicationError::NoGeocodeResult { place },
            other => ApplicationError::ExternalService(other.to_string()),
        })
    }
}

/// Raw Nominatim API response
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ttl_disables_cache() {
        let client = NominatimGeocodingClient::new(&NominatimConfig::for_testing()).unwrap();
        assert!(client.cache.is_none());
    }

    #[test]
    fn test_positive_ttl_enables_cache() {
        let client = NominatimGeocodingClient::new(&NominatimConfig::default()).unwrap();
        assert!(client.cache.is_some());
    }

    #[test]
    fn test_nominatim_result_parsing() {
        let json = r#"[{"lat": "45.75", "lon": "4.85", "display_name": "Lyon"}]"#;
        let results: Vec<NominatimResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].lat, "45.75");
        assert_eq!(results[0].lon, "4.85");
    }

    #[test]
    fn test_nominatim_empty_result() {
        let results: Vec<NominatimResult> = serde_json::from_str("[]").unwrap();
        assert!(results.is_empty());
    }
}
