//! Registry error types.

use thiserror::Error;

/// Errors that can occur in registry and query operations.
///
/// None of these are fatal to the process; the adapter maps each to an
/// externally visible outcome.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The referenced IATA code is not in the registry.
    #[error("unknown airport: {0}")]
    UnknownAirport(String),

    /// An airport with this IATA code already exists.
    #[error("airport already registered: {0}")]
    DuplicateAirport(String),

    /// The measurement kind string matched none of the known data point types.
    #[error("unknown data point type: {0}")]
    UnknownDataPointType(String),

    /// The measurement kind was recognized but its mean is outside the valid range.
    #[error("invalid {kind} measurement: mean {mean} out of range")]
    InvalidMeasurement {
        /// The recognized data point type.
        kind: &'static str,
        /// The rejected mean value.
        mean: f64,
    },

    /// The radius string was non-empty and failed to parse as a number.
    #[error("invalid radius: {0:?}")]
    InvalidRadius(String),
}
