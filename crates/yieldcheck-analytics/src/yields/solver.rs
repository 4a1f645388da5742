//! Newton-Raphson yield-to-maturity solver.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use yieldcheck_core::types::{CashFlow, Compounding};
use yieldcheck_math::solvers::{newton_raphson_bounded, SolverConfig, SolverStep};

use crate::config::{CalculationConfig, DEFAULT_FALLBACK_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::{price_derivative, price_from_yield};

/// Result of a yield-to-maturity calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YtmResult {
    /// Yield as a decimal (0.05 = 5%). The last estimate if not converged.
    pub ytm: f64,
    /// True if `|PV(ytm) - price|` fell below the tolerance.
    pub converged: bool,
    /// Every `(guess, price error)` pair evaluated, in order.
    pub iterations: Vec<SolverStep>,
}

impl YtmResult {
    /// Number of solver evaluations.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        self.iterations.len()
    }

    /// Yield in percent.
    #[must_use]
    pub fn ytm_percent(&self) -> f64 {
        self.ytm * 100.0
    }
}

/// Yield-to-maturity solver.
///
/// Solves `Σ total_i × DF(y, t_i) = price` for `y` with Newton-Raphson
/// and the analytic derivative. Iterates never step to or below `-m`,
/// where the periodic discount base `1 + y/m` stops being positive.
///
/// # Example
///
/// ```rust
/// use yieldcheck_analytics::yields::YieldSolver;
/// use yieldcheck_core::types::{CashFlow, Compounding, Date};
/// use rust_decimal_macros::dec;
///
/// let flows = vec![
///     CashFlow::coupon(Date::from_ymd(2026, 1, 1).unwrap(), dec!(5), 1.0),
///     CashFlow::new(Date::from_ymd(2027, 1, 1).unwrap(), dec!(5), dec!(100), 2.0),
/// ];
///
/// let result = YieldSolver::new().solve(100.0, &flows, Compounding::Annual).unwrap();
/// assert!(result.converged);
/// assert!((result.ytm - 0.05).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
    initial_guess: f64,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a solver with tolerance `1e-6`, 100 iterations and a 5% seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            initial_guess: DEFAULT_FALLBACK_GUESS,
        }
    }

    /// Creates a solver from a calculation config.
    #[must_use]
    pub fn from_config(config: &CalculationConfig) -> Self {
        Self {
            config: config.solver_config(),
            initial_guess: config.fallback_guess,
        }
    }

    /// Sets the convergence tolerance on the price error.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the starting yield, typically the coupon rate.
    #[must_use]
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = guess;
        self
    }

    /// Returns the initial guess.
    #[must_use]
    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    /// Returns the solver settings.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the yield that reprices `cashflows` to `clean_price`.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::NoCashflows` if `cashflows` is empty
    /// - `AnalyticsError::InvalidInput` if the price is not positive and finite
    /// - `AnalyticsError::Math` for an invalid tolerance, iteration cap or seed
    pub fn solve(
        &self,
        clean_price: f64,
        cashflows: &[CashFlow],
        compounding: Compounding,
    ) -> AnalyticsResult<YtmResult> {
        if cashflows.is_empty() {
            return Err(AnalyticsError::NoCashflows);
        }
        validate_price(clean_price)?;

        let objective = |y: f64| price_from_yield(cashflows, y, compounding) - clean_price;
        let derivative = |y: f64| price_derivative(cashflows, y, compounding);

        let result = newton_raphson_bounded(
            objective,
            derivative,
            self.initial_guess,
            compounding.rate_floor(),
            &self.config,
        )?;

        if result.converged {
            debug!(
                "ytm {:.8} after {} iterations (price {clean_price})",
                result.root,
                result.iterations()
            );
        } else {
            warn!(
                "ytm did not converge after {} iterations: last guess {:.8}, error {:.3e}",
                result.iterations(),
                result.root,
                result.residual
            );
        }

        Ok(YtmResult {
            ytm: result.root,
            converged: result.converged,
            iterations: result.steps,
        })
    }
}

pub(crate) fn validate_price(price: f64) -> AnalyticsResult<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(AnalyticsError::invalid_input(format!(
            "price must be positive and finite, got {price}"
        )))
    }
}

/// Yield-to-maturity with the default solver (tolerance `1e-6`, 100
/// iterations, 5% seed).
///
/// # Errors
///
/// See [`YieldSolver::solve`].
pub fn calculate_ytm(
    clean_price: f64,
    cashflows: &[CashFlow],
    compounding: Compounding,
) -> AnalyticsResult<YtmResult> {
    YieldSolver::new().solve(clean_price, cashflows, compounding)
}
