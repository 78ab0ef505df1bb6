//! Error types for distribution construction and dispatch.

use thiserror::Error;

/// Errors raised by distributions, intervals and configuration.
///
/// Domain violations of the evaluation functions (e.g. a percentile outside
/// `[0, 1]`) are not errors: they yield `NaN` per element.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),

    /// Interval bounds with `low >= high`.
    #[error("degenerate interval: low ({low}) must be strictly less than high ({high})")]
    DegenerateInterval { low: f64, high: f64 },

    /// Operation not recognised by the distribution's dispatch.
    #[error("{operation} not supported with {distribution} distribution")]
    UnsupportedOperation {
        operation: String,
        distribution: &'static str,
    },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DistributionError>;
