//! Yield calculations.
//!
//! - [`calculate_ytm`]: yield-to-maturity with the default solver settings
//! - [`YieldSolver`]: configurable tolerance, iteration cap and seed
//!
//! Yields are decimals (0.05 = 5%) compounded per the supplied
//! [`Compounding`](yieldcheck_core::types::Compounding). A solver that runs
//! out of iterations still returns its last estimate, flagged through
//! [`YtmResult::converged`].

mod solver;

pub(crate) use solver::validate_price;
pub use solver::{calculate_ytm, YieldSolver, YtmResult};
