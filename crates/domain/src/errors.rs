//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the WGS84 range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::InvalidCoordinates("latitude 95".to_string());
        assert!(err.to_string().contains("latitude 95"));
    }
}
