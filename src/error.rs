//! Error types for the route optimizer.
//!
//! Everything here is a caller contract violation. Degenerate input and
//! "nothing to improve" are ordinary results, not errors.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type RouteResult<T> = Result<T, RouteError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Latitude/longitude outside (-90..90, -180..180) or not finite.
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// A stop that failed validation, with the reason.
    #[error("invalid stop '{id}': {reason}")]
    InvalidStop { id: String, reason: String },

    #[error("stop id must not be empty")]
    EmptyId,

    #[error("duplicate stop id '{0}'")]
    DuplicateId(String),

    /// A distance provider returned a matrix that does not match the input.
    #[error("distance matrix has {actual} rows/columns, expected {expected}")]
    MatrixShape { expected: usize, actual: usize },
}
