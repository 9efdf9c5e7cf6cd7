use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days between 0001-01-01 (chrono's day 1) and the Unix epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Compact integer encoding of a calendar date: days since 1970-01-01.
///
/// Every date-keyed map in the engine is keyed by `DayId`, so ordering by
/// key equals chronological ordering and predecessor (floor) queries work
/// directly on the integer keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct DayId(pub i64);

impl DayId {
    /// Baseline key for cumulative series (the Unix epoch itself).
    pub const ZERO: DayId = DayId(0);

    /// Sentinel "end of time" used for permanently delisted symbols.
    /// Never converted back to a date.
    pub const END_OF_TIME: DayId = DayId(i64::MAX);

    pub fn from_date(date: NaiveDate) -> Self {
        DayId(i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE)
    }

    pub fn to_date(self) -> Option<NaiveDate> {
        let days_from_ce = self.0.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?;
        NaiveDate::from_num_days_from_ce_opt(i32::try_from(days_from_ce).ok()?)
    }

    /// The day immediately before this one, used for "value as of
    /// yesterday" floor lookups.
    pub fn pred(self) -> DayId {
        DayId(self.0 - 1)
    }

    pub fn succ(self) -> DayId {
        DayId(self.0 + 1)
    }
}

impl From<NaiveDate> for DayId {
    fn from(date: NaiveDate) -> Self {
        DayId::from_date(date)
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_date() {
            Some(date) => write!(f, "{}", date),
            None => write!(f, "day#{}", self.0),
        }
    }
}
