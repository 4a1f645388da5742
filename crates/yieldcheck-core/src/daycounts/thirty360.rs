//! 30/360 day count conventions.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// `360 (Y2 - Y1) + 30 (M2 - M1) + (D2 - D1)` on already-adjusted days.
fn thirty360_days(start: Date, end: Date, d1: u32, d2: u32) -> i64 {
    360 * (i64::from(end.year()) - i64::from(start.year()))
        + 30 * (i64::from(end.month()) - i64::from(start.month()))
        + (i64::from(d2) - i64::from(d1))
}

fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

/// 30/360 US day count convention (Bond Basis).
///
/// Day adjustments, applied in order:
///
/// 1. D1 on the last day of February becomes 30; otherwise D1 = 31 becomes 30.
/// 2. D2 on the last day of February becomes 30 when D1 was also February month end.
/// 3. Otherwise D2 = 31 becomes 30 when D1 is now 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let start_feb_eom = is_last_day_of_february(start);

        let d1 = if start_feb_eom || start.day() == 31 {
            30
        } else {
            start.day()
        };

        let d2 = if (start_feb_eom && is_last_day_of_february(end)) || (end.day() == 31 && d1 == 30) {
            30
        } else {
            end.day()
        };

        thirty360_days(start, end, d1, d2)
    }
}

/// 30E/360 day count convention (Eurobond Basis).
///
/// Both D1 and D2 are capped at 30; February gets no special treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        thirty360_days(start, end, start.day().min(30), end.day().min(30))
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
    fn test_us_full_period() {
        let dc = Thirty360US;
        assert_eq!(dc.day_count(date(2025, 1, 15), date(2025, 7, 15)), 180);
        assert_eq!(dc.year_fraction(date(2025, 1, 15), date(2025, 7, 15)), dec!(0.5));
    }

    #[test]
    fn test_us_31st_rules() {
        let dc = Thirty360US;
        // D1 = 31 -> 30, then D2 = 31 -> 30
        assert_eq!(dc.day_count(date(2025, 1, 31), date(2025, 3, 31)), 60);
        // D1 = 30, D2 = 31 -> 30
        assert_eq!(dc.day_count(date(2025, 4, 30), date(2025, 5, 31)), 30);
        // D1 < 30 leaves D2 = 31 alone
        assert_eq!(dc.day_count(date(2025, 5, 15), date(2025, 5, 31)), 16);
    }

    #[test]
    fn test_us_february_month_end() {
        let dc = Thirty360US;
        // Feb 28 (non-leap) to Aug 31: D1 -> 30, D2 -> 30
        assert_eq!(dc.day_count(date(2025, 2, 28), date(2025, 8, 31)), 180);
        // Feb EOM to Feb EOM
        assert_eq!(dc.day_count(date(2024, 2, 29), date(2025, 2, 28)), 360);
        // Aug 31 back to Feb 28 uses the same formula with a negative result
        assert_eq!(dc.day_count(date(2025, 8, 31), date(2025, 2, 28)), -182);
    }

    #[test]
    fn test_us_same_day_in_different_months_is_zero() {
        // Mar 30 and Mar 31 collapse under the US rules.
        assert_eq!(Thirty360US.day_count(date(2025, 3, 30), date(2025, 3, 31)), 0);
    }

    #[test]
    fn test_eurobond_caps_both_days() {
        let dc = Thirty360E;
        assert_eq!(dc.day_count(date(2025, 1, 15), date(2025, 7, 15)), 180);
        assert_eq!(dc.day_count(date(2025, 5, 15), date(2025, 5, 31)), 15);
        // No February adjustment
        assert_eq!(dc.day_count(date(2025, 2, 28), date(2025, 8, 31)), 182);
    }
}
