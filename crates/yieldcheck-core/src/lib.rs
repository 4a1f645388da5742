//! # yieldcheck Core
//!
//! Core types and conventions shared by every yieldcheck crate:
//!
//! - **Types**: [`Date`], [`Frequency`], [`Compounding`], [`CashFlow`]
//! - **Day Count Conventions**: year fraction strategies selected through
//!   the closed [`DayCountConvention`] enum
//! - **Errors**: [`CoreError`] and the [`CoreResult`] alias
//!
//! ## Example
//!
//! ```rust
//! use yieldcheck_core::prelude::*;
//!
//! let basis: DayCountConvention = "ACT/365".parse().unwrap();
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2026, 1, 1).unwrap();
//! assert_eq!(basis.year_fraction_f64(start, end), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, Compounding, Date, Frequency};
}

pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, Compounding, Date, Frequency};
