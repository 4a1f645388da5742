//! Present value of cash flows at a yield or over a curve.
//!
//! These are the objective functions the yield and spread solvers invert.

use yieldcheck_core::types::{CashFlow, Compounding};
use yieldcheck_curves::BenchmarkCurve;

/// Price of `cashflows` discounted at a single yield.
///
/// `PV = Σ total_i × DF(y, t_i)`, with the discount factor given by the
/// compounding convention.
#[must_use]
pub fn price_from_yield(cashflows: &[CashFlow], yield_rate: f64, compounding: Compounding) -> f64 {
    cashflows
        .iter()
        .map(|cf| cf.total_f64() * compounding.discount_factor(yield_rate, cf.time_years()))
        .sum()
}

/// `d PV / d y` at `yield_rate`.
#[must_use]
pub fn price_derivative(cashflows: &[CashFlow], yield_rate: f64, compounding: Compounding) -> f64 {
    cashflows
        .iter()
        .map(|cf| {
            cf.total_f64() * compounding.discount_factor_derivative(yield_rate, cf.time_years())
        })
        .sum()
}

/// Price of `cashflows` discounted at the curve rate plus a parallel spread.
///
/// Each flow is discounted at `r(t_i) + spread`, with `r` read from the
/// benchmark curve at the flow's own tenor.
#[must_use]
pub fn price_with_zspread(
    cashflows: &[CashFlow],
    curve: &BenchmarkCurve,
    spread: f64,
    compounding: Compounding,
) -> f64 {
    cashflows
        .iter()
        .map(|cf| {
            let t = cf.time_years();
            cf.total_f64() * compounding.discount_factor(curve.rate_at(t) + spread, t)
        })
        .sum()
}
