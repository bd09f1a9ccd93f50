//! Routing and geocoding error types

use thiserror::Error;

/// Errors that can occur when talking to the routing service
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the routing service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the routing service response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service answered but produced no usable route
    /// (non-Ok code or an empty route list)
    #[error("Aucun itinéraire trouvé")]
    NoRouteFound,

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// No candidate matched the place name
    #[error("Aucun résultat trouvé pour \"{0}\"")]
    NotFound(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(RoutingError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(RoutingError::RequestFailed("test".to_string()).is_retryable());
        assert!(RoutingError::Timeout { timeout_secs: 10 }.is_retryable());
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!RoutingError::NoRouteFound.is_retryable());
        assert!(!RoutingError::ParseError("test".to_string()).is_retryable());
    }

    #[test]
    fn test_no_route_message() {
        assert_eq!(
            RoutingError::NoRouteFound.to_string(),
            "Aucun itinéraire trouvé"
        );
    }

    #[test]
    fn test_timeout_message() {
        let err = RoutingError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_geocoding_not_found_message() {
        let err = GeocodingError::NotFound("NowhereLand".to_string());
        assert_eq!(err.to_string(), "Aucun résultat trouvé pour \"NowhereLand\"");
    }
}
