//! Error types for curve operations.

use thiserror::Error;
use yieldcheck_math::MathError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The curve has no points.
    #[error("Empty curve: at least one (tenor, rate) point is required")]
    EmptyCurve,

    /// The curve points are malformed.
    #[error("Invalid curve: {reason}")]
    InvalidCurve {
        /// Description of the problem.
        reason: String,
    },

    /// The requested tenor is not a finite number.
    #[error("Invalid tenor: {tenor}")]
    InvalidTenor {
        /// The tenor that was requested.
        tenor: f64,
    },
}

impl CurveError {
    /// Creates an invalid curve error.
    #[must_use]
    pub fn invalid_curve(reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData { actual: 0, .. } => CurveError::EmptyCurve,
            MathError::InvalidInput { reason } => CurveError::InvalidCurve { reason },
            other => CurveError::invalid_curve(other.to_string()),
        }
    }
}
