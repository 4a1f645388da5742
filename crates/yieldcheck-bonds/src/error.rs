//! Error types for bond operations.

use thiserror::Error;
use yieldcheck_core::types::Date;
use yieldcheck_core::CoreError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// The bond has no cash flows left after the valuation date.
    #[error("No cashflows after valuation date {valuation_date} (redemption {redemption_date})")]
    NoCashflows {
        /// The valuation date.
        valuation_date: Date,
        /// Maturity, or the call date being redeemed at.
        redemption_date: Date,
    },

    /// Schedule dates are inconsistent.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// Description of the inconsistency.
        message: String,
    },

    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Core error (unknown day count basis, bad date, bad frequency).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            message: message.into(),
        }
    }

    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through_verbatim() {
        let core = CoreError::unknown_day_basis("ACT/999");
        let err = BondError::from(core.clone());
        assert_eq!(err.to_string(), core.to_string());
    }

    #[test]
    fn test_no_cashflows_display() {
        let err = BondError::NoCashflows {
            valuation_date: Date::from_ymd(2026, 1, 1).unwrap(),
            redemption_date: Date::from_ymd(2025, 12, 31).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "No cashflows after valuation date 2026-01-01 (redemption 2025-12-31)"
        );
    }
}
