//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The routing service answered but produced no usable route
    #[error("Aucun itinéraire trouvé")]
    NoRouteFound,

    /// The geocoding service answered but matched no place
    #[error("Aucun résultat trouvé pour \"{place}\"")]
    NoGeocodeResult {
        /// The place name that could not be resolved
        place: String,
    },

    /// External service error (network, HTTP status, malformed response)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_route_message_is_user_facing() {
        assert_eq!(
            ApplicationError::NoRouteFound.to_string(),
            "Aucun itinéraire trouvé"
        );
    }

    #[test]
    fn no_geocode_result_names_the_place() {
        let err = ApplicationError::NoGeocodeResult {
            place: "NowhereLand".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Aucun résultat trouvé pour \"NowhereLand\""
        );
    }

    #[test]
    fn retryable_classification() {
        assert!(ApplicationError::ExternalService("timeout".to_string()).is_retryable());
        assert!(!ApplicationError::NoRouteFound.is_retryable());
        assert!(
            !ApplicationError::NoGeocodeResult {
                place: "x".to_string()
            }
            .is_retryable()
        );
    }
}
