//! Curve point type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A benchmark curve node: a tenor in years and a decimal rate (0.045 = 4.5%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Time to maturity in years.
    pub tenor_years: f64,
    /// Rate in decimal.
    pub rate: f64,
}

impl CurvePoint {
    /// Creates a curve point.
    #[must_use]
    pub fn new(tenor_years: f64, rate: f64) -> Self {
        Self { tenor_years, rate }
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((tenor_years, rate): (f64, f64)) -> Self {
        Self::new(tenor_years, rate)
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}Y @ {:.4}%", self.tenor_years, self.rate * 100.0)
    }
}
