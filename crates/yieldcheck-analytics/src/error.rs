//! Error types for the analytics layer.
//!
//! Errors from the lower crates are carried verbatim so that `NoCashflows`,
//! `UnknownDayBasis` and `EmptyCurve` stay distinguishable at the top.

use thiserror::Error;
use yieldcheck_bonds::BondError;
use yieldcheck_curves::CurveError;
use yieldcheck_math::MathError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Unified error type for yield and spread calculations.
///
/// Running out of solver iterations is not an error; results carry a
/// `converged` flag instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// There are no cash flows to discount.
    #[error("no cashflows to discount")]
    NoCashflows,

    /// Invalid input (price, yield or tenor).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid calculation configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bond data or cashflow generation error.
    #[error(transparent)]
    Bond(#[from] BondError),

    /// Benchmark curve error.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Numerical solver error.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True if the error means the bond has nothing left to value, either
    /// because it has matured or because an empty flow list was passed in.
    #[must_use]
    pub fn is_no_cashflows(&self) -> bool {
        matches!(
            self,
            AnalyticsError::NoCashflows | AnalyticsError::Bond(BondError::NoCashflows { .. })
        )
    }
}
