//! Z-spread (zero-volatility spread).
//!
//! The Z-spread is the constant spread that, added to the benchmark rate at
//! each cash flow's tenor, discounts the flows back to the market price:
//!
//! ```text
//! Price = Σ total_i × DF(r(t_i) + Z, t_i)
//! ```

use log::{debug, warn};
use yieldcheck_core::types::{CashFlow, Compounding};
use yieldcheck_curves::BenchmarkCurve;
use yieldcheck_math::solvers::{bisection, newton_raphson_bounded, SolverConfig, SolverResult};

use super::{SpreadResult, SpreadType};
use crate::config::{CalculationConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::yields::validate_price;

/// Bracket searched when Newton-Raphson fails to converge.
const FALLBACK_BRACKET: (f64, f64) = (-0.5, 1.0);

/// Keeps the fallback bracket strictly above the compounding floor.
const FLOOR_MARGIN: f64 = 1e-6;

/// Z-spread calculator.
///
/// Newton-Raphson from `initial_guess` with the analytic derivative. If it
/// stops early without converging, bisection is tried on `[-50%, 100%]`
/// (clipped to the compounding floor) with the iterations Newton left
/// unused, so one solve never logs more than `max_iterations` steps. When the
/// budget is spent or the bracket holds no sign change, the Newton estimate
/// is returned with `converged = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZSpreadCalculator {
    config: SolverConfig,
    initial_guess: f64,
}

impl Default for ZSpreadCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ZSpreadCalculator {
    /// Creates a calculator with tolerance `1e-6`, 100 iterations and a zero seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            initial_guess: 0.0,
        }
    }

    /// Creates a calculator from a calculation config.
    #[must_use]
    pub fn from_config(config: &CalculationConfig) -> Self {
        Self {
            config: config.solver_config(),
            initial_guess: config.zspread_initial_guess,
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations for the solver.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the starting spread.
    #[must_use]
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = guess;
        self
    }

    /// Solves for the Z-spread of `cashflows` at `clean_price`.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::NoCashflows` if `cashflows` is empty
    /// - `AnalyticsError::InvalidInput` if the price is not positive and finite
    /// - `AnalyticsError::Math` for invalid solver settings
    pub fn solve(
        &self,
        clean_price: f64,
        cashflows: &[CashFlow],
        curve: &BenchmarkCurve,
        compounding: Compounding,
    ) -> AnalyticsResult<SpreadResult> {
        if cashflows.is_empty() {
            return Err(AnalyticsError::NoCashflows);
        }
        validate_price(clean_price)?;

        // (amount, t, r(t)) read once; the curve does not move with the spread.
        let legs: Vec<(f64, f64, f64)> = cashflows
            .iter()
            .map(|cf| (cf.total_f64(), cf.time_years(), curve.rate_at(cf.time_years())))
            .collect();

        let objective = |s: f64| -> f64 {
            legs.iter()
                .map(|&(amount, t, r)| amount * compounding.discount_factor(r + s, t))
                .sum::<f64>()
                - clean_price
        };
        let derivative = |s: f64| -> f64 {
            legs.iter()
                .map(|&(amount, t, r)| amount * compounding.discount_factor_derivative(r + s, t))
                .sum()
        };

        // r + s must stay above -m at every leg.
        let min_rate = legs.iter().map(|&(_, _, r)| r).fold(f64::INFINITY, f64::min);
        let floor = compounding.rate_floor().map(|f| f - min_rate);

        let newton = newton_raphson_bounded(
            &objective,
            &derivative,
            self.initial_guess,
            floor,
            &self.config,
        )?;

        if newton.converged {
            debug!(
                "z-spread {:.8} after {} iterations",
                newton.root,
                newton.iterations()
            );
            return Ok(into_spread(newton));
        }

        // Both solvers share one iteration cap.
        let used = u32::try_from(newton.iterations()).unwrap_or(u32::MAX);
        let remaining = self.config.max_iterations.saturating_sub(used);
        if remaining == 0 {
            warn!(
                "z-spread did not converge after {} iterations; last estimate {:.8}",
                newton.iterations(),
                newton.root
            );
            return Ok(into_spread(newton));
        }

        let lower = floor.map_or(FALLBACK_BRACKET.0, |f| FALLBACK_BRACKET.0.max(f + FLOOR_MARGIN));
        let fallback_config = self.config.with_max_iterations(remaining);
        match bisection(&objective, lower, FALLBACK_BRACKET.1, &fallback_config) {
            Ok(mut fallback) => {
                debug!(
                    "z-spread newton stalled at {:.8}; bisection gave {:.8} (converged: {})",
                    newton.root, fallback.root, fallback.converged
                );
                let mut steps = newton.steps;
                steps.append(&mut fallback.steps);
                fallback.steps = steps;
                if !fallback.converged {
                    warn!("z-spread did not converge; last estimate {:.8}", fallback.root);
                }
                Ok(into_spread(fallback))
            }
            Err(err) => {
                warn!(
                    "z-spread did not converge after {} iterations ({err}); last estimate {:.8}",
                    newton.iterations(),
                    newton.root
                );
                Ok(into_spread(newton))
            }
        }
    }
}

fn into_spread(result: SolverResult) -> SpreadResult {
    SpreadResult {
        spread_type: SpreadType::ZSpread,
        spread: result.root,
        converged: result.converged,
        govt_rate: None,
        iterations: result.steps,
    }
}

/// Z-spread from parallel tenor and rate slices with the default solver.
///
/// # Errors
///
/// - `CurveError::EmptyCurve` / `InvalidCurve` for bad curve data
/// - otherwise as [`ZSpreadCalculator::solve`]
pub fn calculate_zspread(
    clean_price: f64,
    cashflows: &[CashFlow],
    tenors: &[f64],
    rates: &[f64],
    compounding: Compounding,
) -> AnalyticsResult<SpreadResult> {
    let curve = BenchmarkCurve::from_tenors_rates(tenors, rates)?;
    zspread_from_curve(clean_price, cashflows, &curve, compounding)
}

/// Z-spread against an already built benchmark curve with the default solver.
///
/// # Errors
///
/// See [`ZSpreadCalculator::solve`].
pub fn zspread_from_curve(
    clean_price: f64,
    cashflows: &[CashFlow],
    curve: &BenchmarkCurve,
    compounding: Compounding,
) -> AnalyticsResult<SpreadResult> {
    ZSpreadCalculator::new().solve(clean_price, cashflows, curve, compounding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::price_with_zspread;
    use crate::yields::calculate_ytm;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use yieldcheck_core::types::Date;
    use yieldcheck_curves::CurveError;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn semi_annual_flows() -> Vec<CashFlow> {
        // 6% semi-annual, 3 years
        (1..=6)
            .map(|k| {
                let principal = if k == 6 { dec!(100) } else { dec!(0) };
                CashFlow::new(
                    date(2025, 1, 1).add_months(6 * k).unwrap(),
                    dec!(3),
                    principal,
                    f64::from(k) / 2.0,
                )
            })
            .collect()
    }

    #[test]
    fn test_flat_curve_zspread_equals_ytm_minus_rate() {
        let flows = semi_annual_flows();
        let ytm = calculate_ytm(98.5, &flows, Compounding::SemiAnnual).unwrap();
        let z = calculate_zspread(98.5, &flows, &[1.0, 10.0], &[0.04, 0.04], Compounding::SemiAnnual)
            .unwrap();
        assert!(z.converged);
        assert_relative_eq!(z.spread, ytm.ytm - 0.04, epsilon = 1e-7);
        assert!(z.govt_rate.is_none());
        assert_eq!(z.spread_type, SpreadType::ZSpread);
    }

    #[test]
    fn test_zspread_reprices_on_sloped_curve() {
        let flows = semi_annual_flows();
        let curve = BenchmarkCurve::from_tenors_rates(&[0.5, 1.0, 2.0, 3.0], &[0.030, 0.034, 0.039, 0.043])
            .unwrap();
        let z = zspread_from_curve(101.0, &flows, &curve, Compounding::SemiAnnual).unwrap();
        assert!(z.converged);
        let pv = price_with_zspread(&flows, &curve, z.spread, Compounding::SemiAnnual);
        assert_relative_eq!(pv, 101.0, epsilon = 1e-6);
        assert_eq!(z.iterations[0].guess, 0.0);
    }

    #[test]
    fn test_higher_price_gives_lower_spread() {
        let flows = semi_annual_flows();
        let tenors = [1.0, 5.0];
        let rates = [0.035, 0.045];
        let cheap = calculate_zspread(95.0, &flows, &tenors, &rates, Compounding::SemiAnnual).unwrap();
        let rich = calculate_zspread(105.0, &flows, &tenors, &rates, Compounding::SemiAnnual).unwrap();
        assert!(cheap.spread > rich.spread);
    }

    #[test]
    fn test_newton_cap_leaves_no_fallback_budget() {
        let flows = semi_annual_flows();
        let curve = BenchmarkCurve::from_tenors_rates(&[1.0], &[0.04]).unwrap();
        let z = ZSpreadCalculator::new()
            .with_max_iterations(2)
            .with_initial_guess(0.9)
            .solve(99.0, &flows, &curve, Compounding::SemiAnnual)
            .unwrap();
        assert_eq!(z.iterations.len(), 2);
        assert!(!z.converged);
    }

    #[test]
    fn test_bisection_fallback_uses_remaining_budget() {
        let flows = semi_annual_flows();
        let curve = BenchmarkCurve::from_tenors_rates(&[1.0], &[0.04]).unwrap();
        // The derivative vanishes this far out, so Newton stops after one evaluation.
        let z = ZSpreadCalculator::new()
            .with_initial_guess(1e9)
            .solve(99.0, &flows, &curve, Compounding::SemiAnnual)
            .unwrap();
        assert!(z.converged);
        assert_eq!(z.iterations[0].guess, 1e9);
        assert!(z.iterations.len() <= DEFAULT_MAX_ITERATIONS as usize);
        let pv = crate::pricing::price_with_zspread(&flows, &curve, z.spread, Compounding::SemiAnnual);
        assert_relative_eq!(pv, 99.0, epsilon = 1e-5);
    }

    #[test]
    fn test_step_log_never_exceeds_cap() {
        let flows = semi_annual_flows();
        let curve = BenchmarkCurve::from_tenors_rates(&[1.0], &[0.04]).unwrap();
        for cap in [1, 3, 10, 40] {
            for guess in [0.9, 1e9] {
                let z = ZSpreadCalculator::new()
                    .with_max_iterations(cap)
                    .with_initial_guess(guess)
                    .solve(99.0, &flows, &curve, Compounding::SemiAnnual)
                    .unwrap();
                assert!(z.iterations.len() <= cap as usize, "cap {cap}, guess {guess}");
            }
        }
    }

    #[test]
    fn test_empty_curve_is_fatal() {
        let flows = semi_annual_flows();
        let err = calculate_zspread(100.0, &flows, &[], &[], Compounding::SemiAnnual).unwrap_err();
        assert_eq!(err, AnalyticsError::Curve(CurveError::EmptyCurve));
    }

    #[test]
    fn test_no_cashflows() {
        let err = calculate_zspread(100.0, &[], &[1.0], &[0.04], Compounding::Annual).unwrap_err();
        assert_eq!(err, AnalyticsError::NoCashflows);
    }
}
