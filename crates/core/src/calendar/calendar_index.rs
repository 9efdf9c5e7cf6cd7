use chrono::NaiveDate;
use log::debug;
use std::collections::{BTreeMap, HashMap};

use super::DayId;

/// Bidirectional mapping between `DayId`s and calendar dates for the days
/// the engine walks.
///
/// Built once per reload from the warehouse's sorted trading dates and
/// lazily extended when a dividend falls on a non-trading date. Days added
/// through `ensure` are members of the walk but are never trading days:
/// the PnL engine uses that distinction to excuse missing prices on
/// dividend-only dates.
#[derive(Debug, Clone, Default)]
pub struct CalendarIndex {
    by_id: BTreeMap<DayId, NaiveDate>,
    by_date: HashMap<NaiveDate, DayId>,
    /// Days present in the original trading calendar (not lazily added).
    trading: BTreeMap<DayId, ()>,
}

impl CalendarIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from the warehouse's trading calendar.
    pub fn from_trading_dates(dates: &[NaiveDate]) -> Self {
        let mut index = Self::new();
        for &date in dates {
            let day = DayId::from_date(date);
            index.by_id.insert(day, date);
            index.by_date.insert(date, day);
            index.trading.insert(day, ());
        }
        index
    }

    /// Makes `date` a member of the index, lazily extending it when the
    /// date is off the trading calendar. Returns the day's id either way.
    pub fn ensure(&mut self, date: NaiveDate) -> DayId {
        let day = DayId::from_date(date);
        if self.by_id.insert(day, date).is_none() {
            debug!("calendar extended with non-trading date {}", date);
            self.by_date.insert(date, day);
        }
        day
    }

    pub fn contains(&self, day: DayId) -> bool {
        self.by_id.contains_key(&day)
    }

    /// True only for days of the original trading calendar; lazily added
    /// dividend days report false.
    pub fn is_trading_day(&self, day: DayId) -> bool {
        self.trading.contains_key(&day)
    }

    pub fn date_of(&self, day: DayId) -> Option<NaiveDate> {
        self.by_id.get(&day).copied()
    }

    pub fn id_of(&self, date: NaiveDate) -> Option<DayId> {
        self.by_date.get(&date).copied()
    }

    /// All known days, ascending. Dividend-only days sort into place
    /// because the id encoding is monotonic in the date.
    pub fn days(&self) -> impl Iterator<Item = DayId> + '_ {
        self.by_id.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
