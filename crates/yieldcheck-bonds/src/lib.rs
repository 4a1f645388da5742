//! # yieldcheck Bonds
//!
//! Bond reference data and cashflow generation.
//!
//! - **Types**: [`BondReference`], [`BondSchedule`], [`CallSchedule`] and the
//!   validated [`Bond`] pair
//! - **Records**: loosely typed [`BondRecord`] rows as supplied by data
//!   loaders, checked once through `TryFrom<BondRecord> for Bond`
//! - **Cashflows**: [`generate_cashflows`] expands the coupon schedule into
//!   dated coupon and principal flows after a valuation date
//!
//! ## Example
//!
//! ```rust
//! use yieldcheck_bonds::prelude::*;
//! use yieldcheck_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let bond = Bond::builder()
//!     .isin("XS0000000001")
//!     .coupon_rate(dec!(5))
//!     .frequency(Frequency::Annual)
//!     .day_count(DayCountConvention::Act365Fixed)
//!     .issue_date(Date::from_ymd(2023, 6, 30).unwrap())
//!     .maturity_date(Date::from_ymd(2027, 6, 30).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let flows = generate_cashflows(&bond, Date::from_ymd(2025, 6, 30).unwrap()).unwrap();
//! assert_eq!(flows.len(), 2);
//! assert_eq!(flows[1].total(), dec!(105));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::doc_markdown)]

pub mod cashflows;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{coupon_schedule, generate_cashflows, generate_cashflows_to, time_fraction};
    pub use crate::error::{BondError, BondResult};
    pub use crate::types::{
        Bond, BondBuilder, BondRecord, BondReference, BondSchedule, CallEntry, CallRecord,
        CallSchedule, FrequencyCode, PriceObservation,
    };
}

pub use cashflows::{generate_cashflows, generate_cashflows_to};
pub use error::{BondError, BondResult};
pub use types::{Bond, BondRecord, BondReference, BondSchedule, CallSchedule, PriceObservation};
