//! Static bond terms.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yieldcheck_core::daycounts::DayCountConvention;
use yieldcheck_core::types::Frequency;

/// Static identity and terms of a fixed-coupon bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondReference {
    /// ISIN.
    pub isin: String,
    /// Security name.
    pub name: String,
    /// Annual coupon rate in percent (5 = 5%).
    pub coupon_rate: Decimal,
    /// ISO currency code.
    pub currency: String,
    /// Day count basis for year fractions.
    pub day_count: DayCountConvention,
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Face value, 100 unless stated.
    pub face_value: Decimal,
}

impl BondReference {
    /// Coupon rate as a decimal (0.05 for 5%).
    #[must_use]
    pub fn coupon_rate_decimal(&self) -> f64 {
        (self.coupon_rate / Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
    }

    /// Annual coupon amount on the face value.
    #[must_use]
    pub fn annual_coupon(&self) -> Decimal {
        self.coupon_rate / Decimal::ONE_HUNDRED * self.face_value
    }

    /// Coupon paid each period: `coupon_rate / 100 / frequency * face_value`.
    ///
    /// Zero for zero-coupon bonds.
    #[must_use]
    pub fn coupon_per_period(&self) -> Decimal {
        match self.frequency.periods_per_year() {
            0 => Decimal::ZERO,
            n => self.annual_coupon() / Decimal::from(n),
        }
    }
}
