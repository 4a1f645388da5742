//! Bond date schedules and call provisions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yieldcheck_core::types::Date;

use crate::error::{BondError, BondResult};

/// A single call date and the price (percent of face) the issuer pays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CallEntry {
    /// Date on which the bond can be called.
    pub call_date: Date,
    /// Call price as percentage of face (102 = 102%).
    pub call_price: Decimal,
}

impl CallEntry {
    /// Creates a new call entry.
    #[must_use]
    pub fn new(call_date: Date, call_price: Decimal) -> Self {
        Self {
            call_date,
            call_price,
        }
    }
}

/// Call schedule, ordered by call date.
///
/// Serializes as a plain list of entries; deserializing runs the same checks
/// as [`CallSchedule::new`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<CallEntry>", into = "Vec<CallEntry>")]
pub struct CallSchedule {
    entries: Vec<CallEntry>,
}

impl CallSchedule {
    /// Creates a call schedule, sorting entries by date.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSchedule` for duplicate dates or
    /// non-positive call prices.
    pub fn new(mut entries: Vec<CallEntry>) -> BondResult<Self> {
        entries.sort_by_key(|e| e.call_date);
        if let Some(pair) = entries.windows(2).find(|w| w[0].call_date == w[1].call_date) {
            return Err(BondError::invalid_schedule(format!(
                "duplicate call date {}",
                pair[0].call_date
            )));
        }
        if let Some(bad) = entries.iter().find(|e| e.call_price <= Decimal::ZERO) {
            return Err(BondError::invalid_schedule(format!(
                "call price on {} must be positive, got {}",
                bad.call_date, bad.call_price
            )));
        }
        Ok(Self { entries })
    }

    /// All entries, earliest first.
    pub fn entries(&self) -> &[CallEntry] {
        &self.entries
    }

    /// Entries with a call date strictly after `date`.
    pub fn entries_after(&self, date: Date) -> impl Iterator<Item = &CallEntry> + '_ {
        self.entries.iter().filter(move |e| e.call_date > date)
    }

    /// First call date strictly after `date`.
    pub fn next_call_after(&self, date: Date) -> Option<&CallEntry> {
        self.entries_after(date).next()
    }

    /// True if there are no call dates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<CallEntry>> for CallSchedule {
    type Error = BondError;

    fn try_from(entries: Vec<CallEntry>) -> BondResult<Self> {
        Self::new(entries)
    }
}

impl From<CallSchedule> for Vec<CallEntry> {
    fn from(schedule: CallSchedule) -> Self {
        schedule.entries
    }
}

/// Key dates of a bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondSchedule {
    /// Issue date.
    pub issue_date: Date,
    /// Maturity date.
    pub maturity_date: Date,
    /// First coupon date, when it differs from the regular roll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_coupon_date: Option<Date>,
    /// Next coupon date as of the record's load date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_coupon_date: Option<Date>,
    /// Optional call schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_schedule: Option<CallSchedule>,
}

impl BondSchedule {
    /// Creates a schedule with no irregular dates or calls.
    #[must_use]
    pub fn new(issue_date: Date, maturity_date: Date) -> Self {
        Self {
            issue_date,
            maturity_date,
            first_coupon_date: None,
            next_coupon_date: None,
            call_schedule: None,
        }
    }

    /// Checks the ordering of the schedule dates.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSchedule` unless `issue_date < maturity_date`,
    /// the first and next coupon dates fall in `(issue_date, maturity_date]`,
    /// and every call date falls in `(issue_date, maturity_date]`.
    pub fn validate(&self) -> BondResult<()> {
        if self.maturity_date <= self.issue_date {
            return Err(BondError::invalid_schedule(format!(
                "maturity {} must be after issue {}",
                self.maturity_date, self.issue_date
            )));
        }

        let in_life = |d: Date| d > self.issue_date && d <= self.maturity_date;

        for (label, date) in [
            ("first coupon date", self.first_coupon_date),
            ("next coupon date", self.next_coupon_date),
        ] {
            if let Some(d) = date.filter(|d| !in_life(*d)) {
                return Err(BondError::invalid_schedule(format!(
                    "{label} {d} outside ({}, {}]",
                    self.issue_date, self.maturity_date
                )));
            }
        }

        if let Some(calls) = &self.call_schedule {
            if let Some(e) = calls.entries().iter().find(|e| !in_life(e.call_date)) {
                return Err(BondError::invalid_schedule(format!(
                    "call date {} outside ({}, {}]",
                    e.call_date, self.issue_date, self.maturity_date
                )));
            }
        }

        Ok(())
    }
}
