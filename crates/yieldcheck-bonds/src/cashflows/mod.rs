//! Cash flow generation for bonds.
//!
//! Coupon dates are rolled backward from maturity in whole coupon periods,
//! each computed directly as `maturity - k * months` (clamped to month end)
//! so that short months do not make later dates drift. An irregular
//! `first_coupon_date` that the roll does not hit becomes the front coupon.

use log::debug;
use rust_decimal::Decimal;
use yieldcheck_core::daycounts::{DayCount, DayCountConvention};
use yieldcheck_core::types::{CashFlow, Date};

use crate::error::{BondError, BondResult};
use crate::types::Bond;

/// Year fraction from `from` to `to` under `day_count`, kept positive.
///
/// 30/360 bases can map a later date onto the same day count (Mar 30 and
/// Mar 31). When `to > from` but the basis gives zero or less, the
/// ACT/365F fraction is returned instead.
pub fn time_fraction(day_count: DayCountConvention, from: Date, to: Date) -> f64 {
    let t = day_count.year_fraction_f64(from, to);
    if t <= 0.0 && to > from {
        DayCountConvention::Act365Fixed.year_fraction_f64(from, to)
    } else {
        t
    }
}

/// All coupon dates of the bond in `(issue_date, maturity_date]`, ascending.
///
/// A zero-coupon bond has the single date `maturity_date`.
///
/// # Errors
///
/// Returns `BondError::Core` if a rolled date leaves the supported range.
pub fn coupon_schedule(bond: &Bond) -> BondResult<Vec<Date>> {
    let schedule = bond.schedule();
    let maturity = schedule.maturity_date;

    if bond.frequency().is_zero() {
        return Ok(vec![maturity]);
    }

    let months = bond.frequency().months_per_period() as i32;
    let stop = schedule.first_coupon_date.unwrap_or(schedule.issue_date);

    let mut dates = Vec::new();
    let mut k = 0;
    loop {
        let date = maturity.add_months(-k * months)?;
        if date <= schedule.issue_date || date < stop {
            break;
        }
        dates.push(date);
        k += 1;
    }

    if let Some(first) = schedule.first_coupon_date {
        if dates.last() != Some(&first) {
            dates.push(first);
        }
    }

    dates.reverse();
    Ok(dates)
}

/// Generates the cash flows strictly after `valuation_date` through maturity.
///
/// Each coupon date pays `coupon_rate / 100 / frequency * face_value`; the
/// final flow also repays `face_value`. `time_years` is measured from
/// `valuation_date` with the bond's day count and is always positive.
///
/// # Example
///
/// ```rust
/// use yieldcheck_bonds::prelude::*;
/// use yieldcheck_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let bond = Bond::builder()
///     .isin("US0000000001")
///     .coupon_rate(dec!(4))
///     .issue_date(Date::from_ymd(2024, 1, 15).unwrap())
///     .maturity_date(Date::from_ymd(2026, 1, 15).unwrap())
///     .build()
///     .unwrap();
///
/// let flows = generate_cashflows(&bond, Date::from_ymd(2025, 3, 1).unwrap()).unwrap();
/// assert_eq!(flows.len(), 2);
/// assert_eq!(flows[0].total(), dec!(2));
/// assert_eq!(flows[1].total(), dec!(102));
/// ```
///
/// # Errors
///
/// Returns `BondError::NoCashflows` if `valuation_date >= maturity_date`.
pub fn generate_cashflows(bond: &Bond, valuation_date: Date) -> BondResult<Vec<CashFlow>> {
    generate_cashflows_to(
        bond,
        valuation_date,
        bond.maturity_date(),
        Decimal::ONE_HUNDRED,
    )
}

/// Generates cash flows assuming redemption on `redemption_date` at
/// `redemption_price` percent of face.
///
/// Used for yield-to-call: coupons after `redemption_date` are dropped. If
/// the redemption date is not a coupon date, the final flow carries the
/// coupon accrued since the previous coupon date, pro rata under the bond's
/// day count.
///
/// # Errors
///
/// - `BondError::NoCashflows` if `valuation_date >= redemption_date`
/// - `BondError::InvalidSchedule` if `redemption_date` is after maturity
///   or the redemption price is not positive
pub fn generate_cashflows_to(
    bond: &Bond,
    valuation_date: Date,
    redemption_date: Date,
    redemption_price: Decimal,
) -> BondResult<Vec<CashFlow>> {
    if valuation_date >= redemption_date {
        return Err(BondError::NoCashflows {
            valuation_date,
            redemption_date,
        });
    }
    if redemption_date > bond.maturity_date() {
        return Err(BondError::invalid_schedule(format!(
            "redemption {redemption_date} is after maturity {}",
            bond.maturity_date()
        )));
    }
    if redemption_price <= Decimal::ZERO {
        return Err(BondError::invalid_schedule(format!(
            "redemption price must be positive, got {redemption_price}"
        )));
    }

    let day_count = bond.day_count();
    let coupon = bond.reference().coupon_per_period();
    let principal = bond.face_value() * redemption_price / Decimal::ONE_HUNDRED;
    let schedule = coupon_schedule(bond)?;

    let mut flows: Vec<CashFlow> = schedule
        .iter()
        .filter(|&&d| d > valuation_date && d <= redemption_date)
        .map(|&d| CashFlow::coupon(d, coupon, time_fraction(day_count, valuation_date, d)))
        .collect();

    let t_redemption = time_fraction(day_count, valuation_date, redemption_date);
    let ends_on_coupon = flows.last().is_some_and(|cf| cf.date() == redemption_date);
    if ends_on_coupon {
        flows.pop();
        flows.push(CashFlow::new(redemption_date, coupon, principal, t_redemption));
    } else {
        let accrued = accrued_coupon(bond, &schedule, redemption_date, coupon);
        flows.push(CashFlow::new(redemption_date, accrued, principal, t_redemption));
    }

    debug!(
        "{}: {} cashflows from {valuation_date} to {redemption_date}",
        bond.isin(),
        flows.len()
    );
    Ok(flows)
}

/// Coupon accrued from the coupon date before `date` up to `date`.
fn accrued_coupon(bond: &Bond, schedule: &[Date], date: Date, coupon: Decimal) -> Decimal {
    if coupon.is_zero() {
        return Decimal::ZERO;
    }
    let day_count = bond.day_count();
    let start = schedule
        .iter()
        .rev()
        .find(|&&d| d < date)
        .copied()
        .unwrap_or_else(|| bond.issue_date());
    let Some(&end) = schedule.iter().find(|&&d| d >= date) else {
        return Decimal::ZERO;
    };

    let period = day_count.year_fraction(start, end);
    if period <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    coupon * day_count.year_fraction(start, date) / period
}
