//! Application layer - Route estimation use cases
//!
//! Contains the multimodal route-estimation services and the port definitions
//! through which they reach the external routing and geocoding services.
//! Orchestrates domain objects and integration adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
