//! Bond data types.

mod bond;
mod record;
mod reference;
mod schedule;

pub use bond::{Bond, BondBuilder};
pub use record::{BondRecord, CallRecord, FrequencyCode, PriceObservation};
pub use reference::BondReference;
pub use schedule::{BondSchedule, CallEntry, CallSchedule};
