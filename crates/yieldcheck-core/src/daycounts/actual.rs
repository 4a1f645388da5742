//! Actual-day day count conventions.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(start.days_between(&end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 Fixed day count convention.
///
/// The year basis is always 365 days, leap years included.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(start.days_between(&end)) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/Actual ISDA day count convention.
///
/// The period is split at year boundaries; days falling in a leap year are
/// divided by 366, the rest by 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start > end {
            return -self.year_fraction(end, start);
        }

        let mut total = Decimal::ZERO;
        let mut cursor = start;

        while cursor.year() < end.year() {
            let basis = cursor.days_in_year();
            // Days up to and including Dec 31; lands the cursor on Jan 1.
            let remaining = basis - cursor.day_of_year() + 1;
            total += Decimal::from(remaining) / Decimal::from(basis);
            cursor = cursor.add_days(i64::from(remaining));
        }

        total + Decimal::from(cursor.days_between(&end)) / Decimal::from(cursor.days_in_year())
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_act360_quarter() {
        let dc = Act360;
        assert_eq!(dc.day_count(date(2025, 1, 1), date(2025, 4, 1)), 90);
        assert_eq!(dc.year_fraction(date(2025, 1, 1), date(2025, 4, 1)), dec!(0.25));
    }

    #[test]
    fn test_act365f_leap_year_exceeds_one() {
        let dc = Act365Fixed;
        assert_eq!(dc.year_fraction(date(2025, 1, 1), date(2026, 1, 1)), dec!(1));
        assert_eq!(
            dc.year_fraction(date(2024, 1, 1), date(2025, 1, 1)),
            dec!(366) / dec!(365)
        );
    }

    #[test]
    fn test_act365f_same_day() {
        let d = date(2025, 6, 15);
        assert_eq!(Act365Fixed.year_fraction(d, d), Decimal::ZERO);
    }

    #[test]
    fn test_actact_isda_whole_years() {
        let dc = ActActIsda;
        assert_eq!(dc.year_fraction(date(2024, 1, 1), date(2025, 1, 1)), dec!(1));
        assert_eq!(dc.year_fraction(date(2023, 1, 1), date(2025, 1, 1)), dec!(2));
    }

    #[test]
    fn test_actact_isda_split_across_years() {
        let dc = ActActIsda;
        // 2023-12-01 .. 2024-03-01: 31 days in 2023, 60 days in 2024
        let expected = dec!(31) / dec!(365) + dec!(60) / dec!(366);
        assert_eq!(dc.year_fraction(date(2023, 12, 1), date(2024, 3, 1)), expected);
    }

    #[test]
    fn test_actact_isda_reversed_is_negative() {
        let dc = ActActIsda;
        let forward = dc.year_fraction(date(2023, 12, 1), date(2024, 3, 1));
        assert_eq!(dc.year_fraction(date(2024, 3, 1), date(2023, 12, 1)), -forward);
    }
}
