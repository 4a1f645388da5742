//! Root-finding algorithms.
//!
//! - [`newton_raphson`]: quadratic convergence when the derivative is known
//! - [`newton_raphson_bounded`]: Newton-Raphson that never steps to or below a floor
//! - [`bisection`]: slow but reliable once a bracket is known
//!
//! Every solver records the `(guess, error)` pair of each function
//! evaluation in [`SolverResult::steps`]. Running out of iterations is
//! reported through [`SolverResult::converged`], not as an error.
//!
//! # Example: YTM of an annual-pay bond
//!
//! ```rust
//! use yieldcheck_math::solvers::{newton_raphson, SolverConfig};
//!
//! // 5% annual coupon, 5 years, price 95
//! let f = |y: f64| {
//!     let pv: f64 = (1..=5).map(|t| 5.0 / (1.0 + y).powi(t)).sum();
//!     pv + 100.0 / (1.0 + y).powi(5) - 95.0
//! };
//! let df = |y: f64| {
//!     let dpv: f64 = (1..=5).map(|t| -f64::from(t) * 5.0 / (1.0 + y).powi(t + 1)).sum();
//!     dpv - 500.0 / (1.0 + y).powi(6)
//! };
//!
//! let result = newton_raphson(f, df, 0.05, &SolverConfig::default()).unwrap();
//! assert!(result.converged);
//! assert!(result.root > 0.05);
//! ```

mod bisection;
mod newton;

pub use bisection::bisection;
pub use newton::{newton_raphson, newton_raphson_bounded};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Upper bound on the step-log allocation made before a solve starts.
const STEP_LOG_RESERVE: usize = 64;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence threshold on `|f(x)|`.
    pub tolerance: f64,
    /// Maximum number of function evaluations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is positive and at least one iteration is allowed.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        Ok(())
    }

    /// Empty step log sized for a typical solve, never for the full cap.
    pub(crate) fn step_log(&self) -> Vec<SolverStep> {
        let cap = usize::try_from(self.max_iterations).unwrap_or(usize::MAX);
        Vec::with_capacity(cap.min(STEP_LOG_RESERVE))
    }
}

/// One function evaluation made by a solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverStep {
    /// The point evaluated.
    pub guess: f64,
    /// `f(guess)`.
    pub error: f64,
}

/// Result of a root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    /// Final estimate. Holds the last iterate when `converged` is false.
    pub root: f64,
    /// `f(root)`.
    pub residual: f64,
    /// True if `|residual| < tolerance`.
    pub converged: bool,
    /// Every evaluation, in order.
    pub steps: Vec<SolverStep>,
}

impl SolverResult {
    /// Number of logged evaluations.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.steps.len()
    }
}
