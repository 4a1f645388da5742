//! Calculation configuration.

use serde::{Deserialize, Serialize};
use yieldcheck_core::types::Compounding;
use yieldcheck_math::solvers::SolverConfig;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Default convergence threshold on the price error, in price units.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration cap for the yield and spread solvers.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// YTM seed used when the coupon rate is unknown or zero.
pub const DEFAULT_FALLBACK_GUESS: f64 = 0.05;

/// Solver settings shared by every calculation in a run.
///
/// Every field has a default, so a partial TOML or JSON document is
/// enough:
///
/// ```rust
/// use yieldcheck_analytics::config::CalculationConfig;
///
/// let config: CalculationConfig = serde_json::from_str(r#"{"max_iterations": 50}"#).unwrap();
/// assert_eq!(config.max_iterations, 50);
/// assert_eq!(config.tolerance, 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Convergence threshold on `|PV - price|`.
    pub tolerance: f64,
    /// Maximum solver iterations.
    pub max_iterations: u32,
    /// YTM seed when the bond pays no coupon.
    pub fallback_guess: f64,
    /// Z-spread seed.
    pub zspread_initial_guess: f64,
    /// Compounding for yields and spreads; `None` follows the coupon frequency.
    pub compounding: Option<Compounding>,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            fallback_guess: DEFAULT_FALLBACK_GUESS,
            zspread_initial_guess: 0.0,
            compounding: None,
        }
    }
}

impl CalculationConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Forces a compounding convention for every bond.
    #[must_use]
    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = Some(compounding);
        self
    }

    /// Solver settings derived from this config.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }

    /// Rejects non-positive tolerances, a zero iteration cap and non-finite seeds.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(AnalyticsError::invalid_config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(AnalyticsError::invalid_config("max_iterations must be at least 1"));
        }
        if !self.fallback_guess.is_finite() || !self.zspread_initial_guess.is_finite() {
            return Err(AnalyticsError::invalid_config("initial guesses must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalculationConfig::default();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.fallback_guess, 0.05);
        assert_eq!(config.zspread_initial_guess, 0.0);
        assert!(config.compounding.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(CalculationConfig::new().with_tolerance(0.0).validate().is_err());
        assert!(CalculationConfig::new().with_tolerance(f64::NAN).validate().is_err());
        assert!(CalculationConfig::new().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_serde_partial_document() {
        let config: CalculationConfig =
            serde_json::from_str(r#"{"tolerance": 1e-8, "compounding": "Annual"}"#).unwrap();
        assert_eq!(config.tolerance, 1e-8);
        assert_eq!(config.compounding, Some(Compounding::Annual));
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }
}
