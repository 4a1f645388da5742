//! # yieldcheck Analytics
//!
//! Yield and spread analytics for fixed-coupon bonds.
//!
//! - **Yields**: Newton-Raphson yield-to-maturity with an iteration log
//! - **Spreads**: Z-spread over a benchmark curve, G-spread at maturity
//! - **Pricing**: present value at a yield or over a spread-shifted curve
//! - **Calculator**: the whole pipeline for one bond, plus yield-to-call
//!   and yield-to-worst
//! - **Batch**: many bonds at once, one outcome per bond
//!
//! ## Architecture
//!
//! `yieldcheck-analytics` depends on `yieldcheck-bonds` for cash flows and
//! on `yieldcheck-curves` for benchmark rates; neither depends on this
//! crate. Solver non-convergence is data (`converged = false`), never an
//! error.
//!
//! ## Usage
//!
//! ```rust
//! use yieldcheck_analytics::prelude::*;
//! use yieldcheck_bonds::prelude::*;
//! use yieldcheck_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let bond = Bond::builder()
//!     .isin("US0000000001")
//!     .coupon_rate(dec!(5))
//!     .frequency(Frequency::Annual)
//!     .day_count(DayCountConvention::Act365Fixed)
//!     .issue_date(Date::from_ymd(2023, 1, 1).unwrap())
//!     .maturity_date(Date::from_ymd(2027, 1, 1).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let valuation = Date::from_ymd(2025, 1, 1).unwrap();
//! let flows = generate_cashflows(&bond, valuation).unwrap();
//! let ytm = calculate_ytm(100.0, &flows, Compounding::Annual).unwrap();
//! assert!(ytm.converged);
//! assert!((ytm.ytm - 0.05).abs() < 1e-4);
//!
//! let g = calculate_gspread(ytm.ytm, 2.0, &[1.0, 5.0], &[0.04, 0.04]).unwrap();
//! assert!((g.as_bps() - 100.0).abs() < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod batch;
pub mod calculator;
pub mod config;
pub mod error;
pub mod pricing;
pub mod spreads;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{analyze_batch, AnalysisRequest, BatchOutcome, BatchSummary};
    pub use crate::calculator::{BondAnalysis, BondCalculator, WorkoutYield};
    pub use crate::config::CalculationConfig;
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::pricing::{price_from_yield, price_with_zspread};
    pub use crate::spreads::{
        calculate_gspread, calculate_zspread, gspread_from_curve, zspread_from_curve, SpreadResult,
        SpreadType, ZSpreadCalculator,
    };
    pub use crate::yields::{calculate_ytm, YieldSolver, YtmResult};
}

pub use error::{AnalyticsError, AnalyticsResult};
