//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by core types and conventions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid or unparseable calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Day count basis code with no matching convention.
    #[error("Unknown day count basis: '{code}'")]
    UnknownDayBasis {
        /// The code as supplied by the caller.
        code: String,
    },

    /// Coupon frequency that is not a supported number of payments per year.
    #[error("Unsupported coupon frequency: {value}")]
    UnsupportedFrequency {
        /// The frequency value as supplied.
        value: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unknown day count basis error.
    #[must_use]
    pub fn unknown_day_basis(code: impl Into<String>) -> Self {
        Self::UnknownDayBasis { code: code.into() }
    }
}
