//! Domain types for bond analytics.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Frequency`]: Coupon payment frequency
//! - [`Compounding`]: Yield compounding convention
//! - [`CashFlow`]: Dated coupon/principal flow with its year fraction

mod cashflow;
mod date;
mod frequency;

pub use cashflow::CashFlow;
pub use date::Date;
pub use frequency::{Compounding, Frequency};
