//! Coupon frequency and the compounding used to discount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// How often a bond pays coupons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Once a year
    Annual,
    /// Twice a year
    #[default]
    SemiAnnual,
    /// Every three months
    Quarterly,
    /// Every month
    Monthly,
    /// No coupons; principal at maturity
    Zero,
}

impl Frequency {
    /// Returns the number of coupon periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
            Frequency::Zero => 0,
        }
    }

    /// Returns the number of months per coupon period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            Frequency::Annual => 12,
            Frequency::SemiAnnual => 6,
            Frequency::Quarterly => 3,
            Frequency::Monthly => 1,
            Frequency::Zero => 0,
        }
    }

    /// True for zero-coupon bonds.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Frequency::Zero)
    }

    /// Maps a payments-per-year count to a frequency.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedFrequency` for counts other than
    /// 0, 1, 2, 4 and 12.
    pub fn from_periods(periods: u32) -> Result<Self, CoreError> {
        match periods {
            0 => Ok(Frequency::Zero),
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            12 => Ok(Frequency::Monthly),
            other => Err(CoreError::UnsupportedFrequency {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
            Frequency::Zero => "Zero Coupon",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    /// Accepts payment counts ("2"), single-letter codes ("S") and names
    /// ("Semi-Annual", "SEMIANNUAL").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_', ' '], "");
        if let Ok(periods) = normalized.parse::<u32>() {
            return Frequency::from_periods(periods);
        }
        match normalized.as_str() {
            "A" | "ANNUAL" | "YEARLY" => Ok(Frequency::Annual),
            "S" | "SEMIANNUAL" => Ok(Frequency::SemiAnnual),
            "Q" | "QUARTERLY" => Ok(Frequency::Quarterly),
            "M" | "MONTHLY" => Ok(Frequency::Monthly),
            "Z" | "ZERO" | "ZEROCOUPON" => Ok(Frequency::Zero),
            _ => Err(CoreError::UnsupportedFrequency {
                value: s.to_string(),
            }),
        }
    }
}

/// Yield compounding convention.
///
/// Discounting for `m` periods per year uses `(1 + y/m)^(-m t)`;
/// continuous compounding uses `exp(-y t)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// `(1 + y)^-t`
    Annual,
    /// `(1 + y/2)^-2t`
    #[default]
    SemiAnnual,
    /// `(1 + y/4)^-4t`
    Quarterly,
    /// `(1 + y/12)^-12t`
    Monthly,
    /// `(1 + y/365)^-365t`
    Daily,
    /// `exp(-y t)`
    Continuous,
}

impl Compounding {
    /// Returns the number of compounding periods per year, `None` if continuous.
    #[must_use]
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
            Compounding::Monthly => Some(12),
            Compounding::Daily => Some(365),
            Compounding::Continuous => None,
        }
    }

    /// Discount factor for `rate` over `t` years.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        match self.periods_per_year() {
            Some(m) => {
                let m = f64::from(m);
                (1.0 + rate / m).powf(-m * t)
            }
            None => (-rate * t).exp(),
        }
    }

    /// Derivative of [`Compounding::discount_factor`] with respect to `rate`.
    #[must_use]
    pub fn discount_factor_derivative(&self, rate: f64, t: f64) -> f64 {
        match self.periods_per_year() {
            Some(m) => {
                let m = f64::from(m);
                -t * (1.0 + rate / m).powf(-m * t - 1.0)
            }
            None => -t * (-rate * t).exp(),
        }
    }

    /// Lowest rate for which the periodic discount base `1 + rate/m` stays
    /// positive. Continuous compounding has no such bound.
    #[must_use]
    pub fn rate_floor(&self) -> Option<f64> {
        self.periods_per_year().map(|m| -f64::from(m))
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
            Compounding::Daily => "Daily",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}

impl From<Frequency> for Compounding {
    /// Street convention: yields compound at the coupon frequency.
    fn from(freq: Frequency) -> Self {
        match freq {
            Frequency::Annual => Compounding::Annual,
            Frequency::SemiAnnual => Compounding::SemiAnnual,
            Frequency::Quarterly => Compounding::Quarterly,
            Frequency::Monthly => Compounding::Monthly,
            Frequency::Zero => Compounding::Annual,
        }
    }
}
