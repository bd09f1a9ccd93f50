//! Domain layer for EcoTrajet
//!
//! Contains the pure building blocks of the route-estimation engine: geographic
//! value objects, the transport mode vocabulary, and the CO₂ emission model.
//! This layer has no I/O and no external service dependencies.

pub mod emissions;
pub mod errors;
pub mod value_objects;

pub use emissions::co2_emissions_grams;
pub use errors::DomainError;
pub use value_objects::*;
