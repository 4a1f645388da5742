//! The validated bond.

use rust_decimal::Decimal;
use serde::Serialize;
use yieldcheck_core::daycounts::DayCountConvention;
use yieldcheck_core::types::{Date, Frequency};

use super::{BondReference, BondSchedule, CallSchedule};
use crate::error::{BondError, BondResult};

/// A fixed-coupon bond: reference terms plus a validated schedule.
///
/// Only constructed through [`Bond::new`], [`BondBuilder`] or
/// `TryFrom<BondRecord>`, so every `Bond` has a positive face value, a
/// non-negative coupon and consistent schedule dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bond {
    reference: BondReference,
    schedule: BondSchedule,
}

impl Bond {
    /// Validates and pairs reference terms with a schedule.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSpec` for an empty ISIN, a negative coupon
    /// or a non-positive face value, and `BondError::InvalidSchedule` if the
    /// schedule dates are inconsistent.
    pub fn new(reference: BondReference, schedule: BondSchedule) -> BondResult<Self> {
        if reference.isin.trim().is_empty() {
            return Err(BondError::invalid_spec("isin cannot be empty"));
        }
        if reference.coupon_rate < Decimal::ZERO {
            return Err(BondError::invalid_spec(format!(
                "{}: coupon_rate cannot be negative, got {}",
                reference.isin, reference.coupon_rate
            )));
        }
        if reference.face_value <= Decimal::ZERO {
            return Err(BondError::invalid_spec(format!(
                "{}: face_value must be positive, got {}",
                reference.isin, reference.face_value
            )));
        }
        schedule.validate()?;

        Ok(Self {
            reference,
            schedule,
        })
    }

    /// Creates a builder.
    #[must_use]
    pub fn builder() -> BondBuilder {
        BondBuilder::default()
    }

    /// Reference terms.
    pub fn reference(&self) -> &BondReference {
        &self.reference
    }

    /// Schedule dates.
    pub fn schedule(&self) -> &BondSchedule {
        &self.schedule
    }

    /// ISIN.
    pub fn isin(&self) -> &str {
        &self.reference.isin
    }

    /// Coupon rate in percent.
    pub fn coupon_rate(&self) -> Decimal {
        self.reference.coupon_rate
    }

    /// Day count basis.
    pub fn day_count(&self) -> DayCountConvention {
        self.reference.day_count
    }

    /// Coupon frequency.
    pub fn frequency(&self) -> Frequency {
        self.reference.frequency
    }

    /// Face value.
    pub fn face_value(&self) -> Decimal {
        self.reference.face_value
    }

    /// Issue date.
    pub fn issue_date(&self) -> Date {
        self.schedule.issue_date
    }

    /// Maturity date.
    pub fn maturity_date(&self) -> Date {
        self.schedule.maturity_date
    }

    /// Call schedule, if the bond is callable.
    pub fn call_schedule(&self) -> Option<&CallSchedule> {
        self.schedule.call_schedule.as_ref().filter(|c| !c.is_empty())
    }

    /// True if the bond is alive (not yet matured) on `date`.
    pub fn is_alive_on(&self, date: Date) -> bool {
        date < self.schedule.maturity_date
    }
}

/// Builder for [`Bond`].
///
/// Defaults: semi-annual coupons, 30/360 US, USD, face 100, name = ISIN.
#[derive(Debug, Clone, Default)]
pub struct BondBuilder {
    isin: Option<String>,
    name: Option<String>,
    coupon_rate: Option<Decimal>,
    currency: Option<String>,
    day_count: Option<DayCountConvention>,
    frequency: Option<Frequency>,
    face_value: Option<Decimal>,
    issue_date: Option<Date>,
    maturity_date: Option<Date>,
    first_coupon_date: Option<Date>,
    next_coupon_date: Option<Date>,
    call_schedule: Option<CallSchedule>,
}

impl BondBuilder {
    /// Sets the ISIN.
    #[must_use]
    pub fn isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Sets the security name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the annual coupon rate in percent.
    #[must_use]
    pub fn coupon_rate(mut self, percent: Decimal) -> Self {
        self.coupon_rate = Some(percent);
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the day count basis.
    #[must_use]
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// Sets the coupon frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, face_value: Decimal) -> Self {
        self.face_value = Some(face_value);
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: Date) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: Date) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets an irregular first coupon date.
    #[must_use]
    pub fn first_coupon_date(mut self, date: Date) -> Self {
        self.first_coupon_date = Some(date);
        self
    }

    /// Sets the next coupon date.
    #[must_use]
    pub fn next_coupon_date(mut self, date: Date) -> Self {
        self.next_coupon_date = Some(date);
        self
    }

    /// Sets the call schedule.
    #[must_use]
    pub fn call_schedule(mut self, schedule: CallSchedule) -> Self {
        self.call_schedule = Some(schedule);
        self
    }

    /// Builds the bond.
    ///
    /// # Errors
    ///
    /// Returns `BondError::MissingField` if ISIN, coupon rate, issue date or
    /// maturity date is missing, plus any error from [`Bond::new`].
    pub fn build(self) -> BondResult<Bond> {
        let isin = self.isin.ok_or_else(|| BondError::missing_field("isin"))?;
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;
        let issue_date = self
            .issue_date
            .ok_or_else(|| BondError::missing_field("issue_date"))?;
        let maturity_date = self
            .maturity_date
            .ok_or_else(|| BondError::missing_field("maturity_date"))?;

        let reference = BondReference {
            name: self.name.unwrap_or_else(|| isin.clone()),
            isin,
            coupon_rate,
            currency: self.currency.unwrap_or_else(|| "USD".to_string()),
            day_count: self.day_count.unwrap_or(DayCountConvention::Thirty360US),
            frequency: self.frequency.unwrap_or_default(),
            face_value: self.face_value.unwrap_or(Decimal::ONE_HUNDRED),
        };
        let schedule = BondSchedule {
            issue_date,
            maturity_date,
            first_coupon_date: self.first_coupon_date,
            next_coupon_date: self.next_coupon_date,
            call_schedule: self.call_schedule,
        };

        Bond::new(reference, schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn builder() -> BondBuilder {
        Bond::builder()
            .isin("US912828XY12")
            .coupon_rate(dec!(4.5))
            .issue_date(date(2020, 5, 15))
            .maturity_date(date(2030, 5, 15))
    }

    #[test]
    fn test_builder_defaults() {
        let bond = builder().build().unwrap();

        assert_eq!(bond.reference().name, "US912828XY12");
        assert_eq!(bond.frequency(), Frequency::SemiAnnual);
        assert_eq!(bond.day_count(), DayCountConvention::Thirty360US);
        assert_eq!(bond.face_value(), dec!(100));
        assert!(bond.call_schedule().is_none());
        assert!(bond.is_alive_on(date(2030, 5, 14)));
        assert!(!bond.is_alive_on(date(2030, 5, 15)));
    }

    #[test]
    fn test_missing_fields() {
        let err = Bond::builder().coupon_rate(dec!(5)).build().unwrap_err();
        assert_eq!(err, BondError::missing_field("isin"));

        let err = Bond::builder().isin("X").coupon_rate(dec!(5)).build().unwrap_err();
        assert_eq!(err, BondError::missing_field("issue_date"));
    }

    #[test]
    fn test_rejects_bad_terms() {
        assert!(matches!(
            builder().coupon_rate(dec!(-1)).build(),
            Err(BondError::InvalidSpec { .. })
        ));
        assert!(matches!(
            builder().face_value(Decimal::ZERO).build(),
            Err(BondError::InvalidSpec { .. })
        ));
        assert!(matches!(
            builder().maturity_date(date(2019, 1, 1)).build(),
            Err(BondError::InvalidSchedule { .. })
        ));
    }
}
