//! Loosely typed records as supplied by data loaders.
//!
//! Reference and schedule rows arrive with string dates, string day count
//! codes and frequencies given either as a payment count or a name. They
//! are checked once, here, and become a [`Bond`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yieldcheck_core::daycounts::DayCountConvention;
use yieldcheck_core::types::{Date, Frequency};

use super::{Bond, BondReference, BondSchedule, CallEntry, CallSchedule};
use crate::error::{BondError, BondResult};

/// Coupon frequency as it appears in a record: `2` or `"Semi-Annual"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrequencyCode {
    /// Payments per year.
    Periods(u32),
    /// Frequency name or code.
    Code(String),
}

impl Default for FrequencyCode {
    fn default() -> Self {
        FrequencyCode::Periods(2)
    }
}

impl FrequencyCode {
    /// Parses the code into a [`Frequency`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedFrequency` (wrapped) for unknown codes.
    pub fn parse(&self) -> BondResult<Frequency> {
        let frequency = match self {
            FrequencyCode::Periods(n) => Frequency::from_periods(*n)?,
            FrequencyCode::Code(code) => code.parse::<Frequency>()?,
        };
        Ok(frequency)
    }
}

/// One row of a call schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Call date, `YYYY-MM-DD`.
    pub date: String,
    /// Call price in percent of face.
    pub price: Decimal,
}

/// Reference and schedule fields of one bond, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    /// ISIN.
    pub isin: String,
    /// Security name.
    #[serde(default)]
    pub name: Option<String>,
    /// Annual coupon rate in percent.
    pub coupon_rate: Decimal,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Day count basis code, e.g. `"ACT/365"` or `"30/360"`.
    pub day_basis: String,
    /// Coupon frequency.
    #[serde(default)]
    pub coupon_frequency: FrequencyCode,
    /// Face value; 100 when absent.
    #[serde(default)]
    pub face_value: Option<Decimal>,
    /// Issue date, `YYYY-MM-DD`.
    pub issue_date: String,
    /// Maturity date, `YYYY-MM-DD`.
    pub maturity_date: String,
    /// First coupon date, `YYYY-MM-DD`.
    #[serde(default)]
    pub first_coupon_date: Option<String>,
    /// Next coupon date, `YYYY-MM-DD`.
    #[serde(default)]
    pub next_coupon_date: Option<String>,
    /// Call schedule rows.
    #[serde(default)]
    pub call_schedule: Vec<CallRecord>,
}

fn parse_optional_date(value: Option<&str>) -> BondResult<Option<Date>> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Date::parse)
        .transpose()
        .map_err(BondError::from)
}

impl TryFrom<BondRecord> for Bond {
    type Error = BondError;

    fn try_from(record: BondRecord) -> BondResult<Self> {
        let day_count: DayCountConvention = record.day_basis.parse()?;
        let frequency = record.coupon_frequency.parse()?;

        let call_schedule = if record.call_schedule.is_empty() {
            None
        } else {
            let entries = record
                .call_schedule
                .iter()
                .map(|c| Ok(CallEntry::new(Date::parse(&c.date)?, c.price)))
                .collect::<BondResult<Vec<_>>>()?;
            Some(CallSchedule::new(entries)?)
        };

        let reference = BondReference {
            name: record.name.unwrap_or_else(|| record.isin.clone()),
            isin: record.isin,
            coupon_rate: record.coupon_rate,
            currency: record.currency.unwrap_or_else(|| "USD".to_string()),
            day_count,
            frequency,
            face_value: record.face_value.unwrap_or(Decimal::ONE_HUNDRED),
        };
        let schedule = BondSchedule {
            issue_date: Date::parse(&record.issue_date)?,
            maturity_date: Date::parse(&record.maturity_date)?,
            first_coupon_date: parse_optional_date(record.first_coupon_date.as_deref())?,
            next_coupon_date: parse_optional_date(record.next_coupon_date.as_deref())?,
            call_schedule,
        };

        Bond::new(reference, schedule)
    }
}

/// A clean price observed for one security on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// ISIN.
    pub isin: String,
    /// Observation (valuation) date.
    pub date: Date,
    /// Clean price in percent of face (98.5 = 98.5%).
    pub clean_price: f64,
}

impl PriceObservation {
    /// Creates a price observation.
    #[must_use]
    pub fn new(isin: impl Into<String>, date: Date, clean_price: f64) -> Self {
        Self {
            isin: isin.into(),
            date,
            clean_price,
        }
    }

    /// Checks that the price is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSpec` otherwise.
    pub fn validate(&self) -> BondResult<()> {
        if self.clean_price.is_finite() && self.clean_price > 0.0 {
            Ok(())
        } else {
            Err(BondError::invalid_spec(format!(
                "{}: clean price on {} must be positive, got {}",
                self.isin, self.date, self.clean_price
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use yieldcheck_core::CoreError;

    fn record_json() -> serde_json::Value {
        serde_json::json!({
            "isin": "XS1234567890",
            "name": "ACME 4.25% 2031",
            "coupon_rate": 4.25,
            "currency": "EUR",
            "day_basis": "30E/360",
            "coupon_frequency": 1,
            "issue_date": "2021-03-15",
            "maturity_date": "2031-03-15",
            "call_schedule": [
                {"date": "2029-03-15", "price": 100.0},
                {"date": "2027-03-15", "price": 101.5}
            ]
        })
    }

    #[test]
    fn test_record_to_bond() {
        let record: BondRecord = serde_json::from_value(record_json()).unwrap();
        let bond = Bond::try_from(record).unwrap();

        assert_eq!(bond.isin(), "XS1234567890");
        assert_eq!(bond.coupon_rate(), dec!(4.25));
        assert_eq!(bond.day_count(), DayCountConvention::Thirty360E);
        assert_eq!(bond.frequency(), Frequency::Annual);
        assert_eq!(bond.face_value(), dec!(100));
        let calls = bond.call_schedule().unwrap();
        assert_eq!(calls.entries()[0].call_price, dec!(101.5));
    }

    #[test]
    fn test_frequency_by_name() {
        let mut json = record_json();
        json["coupon_frequency"] = "Quarterly".into();
        let record: BondRecord = serde_json::from_value(json).unwrap();
        assert_eq!(Bond::try_from(record).unwrap().frequency(), Frequency::Quarterly);
    }

    #[test]
    fn test_unknown_day_basis_surfaces() {
        let mut json = record_json();
        json["day_basis"] = "BUS/252".into();
        let record: BondRecord = serde_json::from_value(json).unwrap();

        let err = Bond::try_from(record).unwrap_err();
        assert_eq!(err, BondError::Core(CoreError::unknown_day_basis("BUS/252")));
        assert_eq!(err.to_string(), "Unknown day count basis: 'BUS/252'");
    }

    #[test]
    fn test_bad_date_and_frequency() {
        let mut json = record_json();
        json["maturity_date"] = "15/03/2031".into();
        let record: BondRecord = serde_json::from_value(json).unwrap();
        assert!(matches!(
            Bond::try_from(record),
            Err(BondError::Core(CoreError::InvalidDate { .. }))
        ));

        let mut json = record_json();
        json["coupon_frequency"] = 3.into();
        let record: BondRecord = serde_json::from_value(json).unwrap();
        assert!(matches!(
            Bond::try_from(record),
            Err(BondError::Core(CoreError::UnsupportedFrequency { .. }))
        ));
    }

    #[test]
    fn test_blank_optional_dates_are_absent() {
        let mut json = record_json();
        json["first_coupon_date"] = "".into();
        let record: BondRecord = serde_json::from_value(json).unwrap();
        assert!(Bond::try_from(record).unwrap().schedule().first_coupon_date.is_none());
    }

    #[test]
    fn test_price_observation_validation() {
        let d = Date::from_ymd(2025, 6, 30).unwrap();
        assert!(PriceObservation::new("X", d, 98.5).validate().is_ok());
        assert!(PriceObservation::new("X", d, 0.0).validate().is_err());
        assert!(PriceObservation::new("X", d, f64::NAN).validate().is_err());
    }
}
