//! Cash flow type for bond analytics.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::Date;

/// A dated bond cash flow, split into coupon and principal.
///
/// `time_years` is the day-count year fraction from the valuation date the
/// flow was generated for; `total` is always `coupon_amount + principal_amount`.
///
/// # Example
///
/// ```rust
/// use yieldcheck_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::new(Date::from_ymd(2027, 6, 15).unwrap(), dec!(2.5), dec!(100), 2.0);
/// assert_eq!(cf.total(), dec!(102.5));
/// assert!(cf.is_final());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashFlow {
    date: Date,
    coupon_amount: Decimal,
    principal_amount: Decimal,
    total: Decimal,
    time_years: f64,
}

impl CashFlow {
    /// Creates a cash flow.
    #[must_use]
    pub fn new(date: Date, coupon_amount: Decimal, principal_amount: Decimal, time_years: f64) -> Self {
        Self {
            date,
            coupon_amount,
            principal_amount,
            total: coupon_amount + principal_amount,
            time_years,
        }
    }

    /// Creates a coupon-only cash flow.
    #[must_use]
    pub fn coupon(date: Date, amount: Decimal, time_years: f64) -> Self {
        Self::new(date, amount, Decimal::ZERO, time_years)
    }

    /// Payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Coupon part of the flow.
    #[must_use]
    pub fn coupon_amount(&self) -> Decimal {
        self.coupon_amount
    }

    /// Principal part of the flow.
    #[must_use]
    pub fn principal_amount(&self) -> Decimal {
        self.principal_amount
    }

    /// Coupon plus principal.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Total as `f64`, for the numerical solvers.
    #[must_use]
    pub fn total_f64(&self) -> f64 {
        self.total.to_f64().unwrap_or(0.0)
    }

    /// Year fraction from the valuation date to the payment date.
    #[must_use]
    pub fn time_years(&self) -> f64 {
        self.time_years
    }

    /// True if the flow repays principal.
    #[must_use]
    pub fn is_final(&self) -> bool {
        !self.principal_amount.is_zero()
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} t={:.6} coupon={} principal={} total={}",
            self.date, self.time_years, self.coupon_amount, self.principal_amount, self.total
        )
    }
}
