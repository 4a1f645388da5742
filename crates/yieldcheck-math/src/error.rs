//! Errors raised by the root finders and interpolators.

use thiserror::Error;

/// Result alias for this crate.
pub type MathResult<T> = Result<T, MathError>;

/// Bad inputs to a numerical routine.
///
/// Failing to converge is not an error here; solvers return it as data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The bisection endpoints do not straddle a root.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Left endpoint.
        a: f64,
        /// Right endpoint.
        b: f64,
        /// `f(a)`.
        fa: f64,
        /// `f(b)`.
        fb: f64,
    },

    /// Too few points (an empty curve, typically).
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Points needed.
        required: usize,
        /// Points supplied.
        actual: usize,
    },

    /// A parameter or data value is unusable.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },
}

impl MathError {
    /// Shorthand for [`MathError::InvalidInput`].
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`MathError::InsufficientData`].
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
