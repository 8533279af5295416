//! Error types for reliability estimation.

use thiserror::Error;

/// Failure reported by the estimator.
///
/// The estimator never substitutes defaults or drops points: it either
/// returns a complete result or one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReliabilityError {
    /// Malformed or insufficient failure-time data.
    #[error("invalid sample: {0}")]
    InvalidSample(String),

    /// A parameter (fitted or supplied) that makes the reliability formulas undefined.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReliabilityError>;
