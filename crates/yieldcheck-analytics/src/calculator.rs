//! Bond-level calculator composing cashflows, yields and spreads.
//!
//! [`BondCalculator::analyze`] runs the full pipeline for one bond:
//! cash flows after the valuation date, YTM seeded at the coupon rate,
//! Z-spread over the benchmark curve and G-spread at maturity.

use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;
use yieldcheck_bonds::cashflows::{generate_cashflows, generate_cashflows_to, time_fraction};
use yieldcheck_bonds::types::{Bond, CallEntry};
use yieldcheck_core::types::{CashFlow, Compounding, Date};
use yieldcheck_curves::BenchmarkCurve;

use crate::config::CalculationConfig;
use crate::error::AnalyticsResult;
use crate::spreads::{gspread_from_curve, SpreadResult, ZSpreadCalculator};
use crate::yields::{YieldSolver, YtmResult};

/// Everything computed for one bond at one price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondAnalysis {
    /// ISIN of the bond.
    pub isin: String,
    /// Valuation date.
    pub valuation_date: Date,
    /// Clean price the analytics were solved against.
    pub clean_price: f64,
    /// Compounding used for yield and Z-spread.
    pub compounding: Compounding,
    /// Day-count year fraction from valuation to maturity.
    pub maturity_years: f64,
    /// Remaining cash flows.
    pub cashflows: Vec<CashFlow>,
    /// Yield-to-maturity.
    pub ytm: YtmResult,
    /// Z-spread over the benchmark curve.
    pub zspread: SpreadResult,
    /// G-spread at maturity.
    pub gspread: SpreadResult,
}

impl BondAnalysis {
    /// True if both the yield and the Z-spread solvers converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.ytm.converged && self.zspread.converged
    }
}

/// Yield to a specific workout date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutYield {
    /// Redemption date assumed.
    pub workout_date: Date,
    /// Redemption price, percent of face.
    pub workout_price: Decimal,
    /// Yield solved to that redemption.
    pub result: YtmResult,
}

/// Runs the analytics pipeline with one [`CalculationConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BondCalculator {
    config: CalculationConfig,
}

impl BondCalculator {
    /// Creates a calculator.
    #[must_use]
    pub fn new(config: CalculationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }

    /// Compounding for `bond`: the configured override, else its coupon frequency.
    #[must_use]
    pub fn compounding_for(&self, bond: &Bond) -> Compounding {
        self.config
            .compounding
            .unwrap_or_else(|| Compounding::from(bond.frequency()))
    }

    fn yield_solver(&self, bond: &Bond) -> YieldSolver {
        let coupon = bond.reference().coupon_rate_decimal();
        let seed = if coupon > 0.0 { coupon } else { self.config.fallback_guess };
        YieldSolver::from_config(&self.config).with_initial_guess(seed)
    }

    /// Analyzes `bond` at `clean_price` against `curve`.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::InvalidConfig` for an invalid configuration
    /// - `BondError::NoCashflows` if the bond has matured by `valuation_date`
    /// - `AnalyticsError::InvalidInput` for a non-positive price
    pub fn analyze(
        &self,
        bond: &Bond,
        clean_price: f64,
        curve: &BenchmarkCurve,
        valuation_date: Date,
    ) -> AnalyticsResult<BondAnalysis> {
        self.config.validate()?;

        let cashflows = generate_cashflows(bond, valuation_date)?;
        let compounding = self.compounding_for(bond);

        let ytm = self.yield_solver(bond).solve(clean_price, &cashflows, compounding)?;
        let zspread = ZSpreadCalculator::from_config(&self.config).solve(
            clean_price,
            &cashflows,
            curve,
            compounding,
        )?;

        let maturity_years = time_fraction(bond.day_count(), valuation_date, bond.maturity_date());
        let gspread = gspread_from_curve(ytm.ytm, maturity_years, curve)?;

        debug!(
            "{}: ytm {:.6}, z {:.2}bp, g {:.2}bp",
            bond.isin(),
            ytm.ytm,
            zspread.as_bps(),
            gspread.as_bps()
        );

        Ok(BondAnalysis {
            isin: bond.isin().to_string(),
            valuation_date,
            clean_price,
            compounding,
            maturity_years,
            cashflows,
            ytm,
            zspread,
            gspread,
        })
    }

    /// Yield assuming the bond is called on `call.call_date` at `call.call_price`.
    ///
    /// # Errors
    ///
    /// - `BondError::NoCashflows` if the call date is not after `valuation_date`
    /// - `BondError::InvalidSchedule` if the call date is after maturity
    /// - otherwise as [`YieldSolver::solve`]
    pub fn yield_to_call(
        &self,
        bond: &Bond,
        clean_price: f64,
        valuation_date: Date,
        call: &CallEntry,
    ) -> AnalyticsResult<WorkoutYield> {
        self.config.validate()?;
        let cashflows = generate_cashflows_to(bond, valuation_date, call.call_date, call.call_price)?;
        let result = self
            .yield_solver(bond)
            .solve(clean_price, &cashflows, self.compounding_for(bond))?;
        Ok(WorkoutYield {
            workout_date: call.call_date,
            workout_price: call.call_price,
            result,
        })
    }

    /// Lowest yield over maturity and every call date after `valuation_date`.
    ///
    /// Converged candidates are preferred; if none converged, the lowest
    /// estimate is returned with its `converged = false` flag.
    ///
    /// # Errors
    ///
    /// Fails if the yield to maturity cannot be computed. Call dates whose
    /// yield cannot be computed are skipped.
    pub fn yield_to_worst(
        &self,
        bond: &Bond,
        clean_price: f64,
        valuation_date: Date,
    ) -> AnalyticsResult<WorkoutYield> {
        let maturity = CallEntry::new(bond.maturity_date(), Decimal::ONE_HUNDRED);
        let mut worst = self.yield_to_call(bond, clean_price, valuation_date, &maturity)?;

        let Some(schedule) = bond.call_schedule() else {
            return Ok(worst);
        };
        for call in schedule.entries_after(valuation_date) {
            match self.yield_to_call(bond, clean_price, valuation_date, call) {
                Ok(candidate) if is_worse(&candidate.result, &worst.result) => worst = candidate,
                Ok(_) => {}
                Err(err) => debug!("{}: skipping call {}: {err}", bond.isin(), call.call_date),
            }
        }
        Ok(worst)
    }
}

/// A converged yield beats an unconverged one; otherwise the lower yield wins.
fn is_worse(candidate: &YtmResult, current: &YtmResult) -> bool {
    match (candidate.converged, current.converged) {
        (true, false) => true,
        (false, true) => false,
        _ => candidate.ytm < current.ytm,
    }
}
