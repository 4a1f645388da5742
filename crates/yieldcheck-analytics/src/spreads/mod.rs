//! Spread calculations over a benchmark curve.
//!
//! | Spread | Question | Method |
//! |--------|----------|--------|
//! | Z-Spread | What parallel shift of the curve reprices the bond? | Newton-Raphson, bisection fallback |
//! | G-Spread | How far is the YTM above the benchmark at maturity? | Closed form |
//!
//! Spreads are decimals; [`SpreadResult::as_bps`] converts to basis points.

mod gspread;
mod zspread;

pub use gspread::{calculate_gspread, gspread_from_curve};
pub use zspread::{calculate_zspread, zspread_from_curve, ZSpreadCalculator};

use serde::{Deserialize, Serialize};
use std::fmt;
use yieldcheck_math::solvers::SolverStep;

/// Kind of spread in a [`SpreadResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpreadType {
    /// Zero-volatility spread over the benchmark curve.
    ZSpread,
    /// Spread of the YTM over the interpolated benchmark rate.
    GSpread,
}

impl fmt::Display for SpreadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpreadType::ZSpread => write!(f, "Z-Spread"),
            SpreadType::GSpread => write!(f, "G-Spread"),
        }
    }
}

/// Result of a spread calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadResult {
    /// Which spread this is.
    pub spread_type: SpreadType,
    /// Spread as a decimal (0.0125 = 125bp).
    pub spread: f64,
    /// False if the Z-spread solver ran out of iterations. Always true for G-spread.
    pub converged: bool,
    /// Benchmark rate at maturity (G-spread only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub govt_rate: Option<f64>,
    /// Solver evaluations (empty for G-spread).
    #[serde(default)]
    pub iterations: Vec<SolverStep>,
}

impl SpreadResult {
    /// Spread in basis points.
    #[must_use]
    pub fn as_bps(&self) -> f64 {
        self.spread * 10_000.0
    }
}

impl fmt::Display for SpreadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}bp", self.spread_type, self.as_bps())?;
        if !self.converged {
            write!(f, " (not converged)")?;
        }
        Ok(())
    }
}
