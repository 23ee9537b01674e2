//! Error types for statistical operations.

use std::fmt;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Input samples violate a precondition of the computation
    /// (mismatched lengths, too few samples, non-finite values, zero variance).
    InvalidInput { arg: &'static str, reason: String },

    /// Invalid parameter value for a distribution.
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Probability value out of range [0, 1].
    InvalidProbability { value: f64 },

    /// The tensor backend failed to carry out an operation.
    NumericalError { message: String },
}

impl StatsError {
    pub(crate) fn invalid_input(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            arg,
            reason: reason.into(),
        }
    }

    /// Whether this error reports a violated input precondition.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { arg, reason } => {
                write!(f, "Invalid input '{}': {}", arg, reason)
            }
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = {}: {}", name, value, reason)
            }
            Self::InvalidProbability { value } => {
                write!(f, "Invalid probability {}: must be in [0, 1]", value)
            }
            Self::NumericalError { message } => {
                write!(f, "Numerical error: {}", message)
            }
        }
    }
}

impl std::error::Error for StatsError {}

impl From<numr::error::Error> for StatsError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumericalError {
            message: err.to_string(),
        }
    }
}
