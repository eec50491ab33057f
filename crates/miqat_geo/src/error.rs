//! Error types for geographic input.

use thiserror::Error;

/// Errors from coordinate validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GeoError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or NaN.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}
