//! Known price gaps for delisted or temporarily unlisted instruments.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calendar::DayId;

/// An inclusive day range during which a symbol has no market price.
/// `end == DayId::END_OF_TIME` means the symbol is permanently delisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRange {
    pub start: DayId,
    pub end: DayId,
}

impl DayRange {
    pub fn contains(&self, day: DayId) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn is_open_ended(&self) -> bool {
        self.end == DayId::END_OF_TIME
    }
}

/// Lookup interface the PnL engine uses to excuse missing prices.
pub trait OutdatedSymbolTableTrait: Send + Sync {
    fn contains(&self, symbol: &str) -> bool;

    /// Start of the symbol's final no-price range, i.e. the day after
    /// which lookups are expected to come back empty.
    fn last_listed_date(&self, symbol: &str) -> Option<DayId>;

    /// Whether a missing price on `day` is an expected gap for `symbol`.
    fn is_excused(&self, symbol: &str, day: DayId) -> bool;
}

/// In-memory outdated/delisted symbol table: symbol to one or more
/// no-price day ranges.
#[derive(Debug, Clone, Default)]
pub struct OutdatedSymbolTable {
    ranges: BTreeMap<String, Vec<DayRange>>,
}

impl OutdatedSymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a no-price range for `symbol`. Ranges are kept sorted by
    /// start day.
    pub fn add_range(&mut self, symbol: &str, start: DayId, end: DayId) {
        let ranges = self.ranges.entry(symbol.to_string()).or_default();
        ranges.push(DayRange { start, end });
        ranges.sort_by_key(|r| r.start);
    }

    /// Marks `symbol` as permanently delisted from `start` onward.
    pub fn add_delisted(&mut self, symbol: &str, start: DayId) {
        self.add_range(symbol, start, DayId::END_OF_TIME);
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.ranges.keys().map(String::as_str)
    }
}

impl OutdatedSymbolTableTrait for OutdatedSymbolTable {
    fn contains(&self, symbol: &str) -> bool {
        self.ranges.contains_key(symbol)
    }

    fn last_listed_date(&self, symbol: &str) -> Option<DayId> {
        self.ranges
            .get(symbol)
            .and_then(|ranges| ranges.last())
            .map(|range| range.start)
    }

    fn is_excused(&self, symbol: &str, day: DayId) -> bool {
        self.ranges
            .get(symbol)
            .map(|ranges| ranges.iter().any(|range| range.contains(day)))
            .unwrap_or(false)
    }
}
