use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::calendar::DayId;
use crate::ledger::LedgerKey;
use crate::transactions::AccountType;

/// Per-account amounts on one day.
pub type AccountAmounts = HashMap<AccountType, Decimal>;

/// Day-keyed value series for one ledger.
pub type DailySeries = BTreeMap<DayId, Decimal>;

/// Day-keyed, account-bucketed series across all ledgers.
pub type DailyAccountSeries = BTreeMap<DayId, AccountAmounts>;

/// Treats an absent map value as zero.
///
/// This is the single place absent-to-zero conversion happens; every
/// arithmetic site goes through it instead of sprinkling `unwrap_or`
/// defaults, so a gap can never propagate as a hole in a sum.
pub fn sanitize(value: Option<&Decimal>) -> Decimal {
    value.copied().unwrap_or(Decimal::ZERO)
}

/// Floor lookup: the value at the greatest key less than or equal to
/// `day`. This is the "last known value as of" primitive the cumulative
/// series are built on.
pub fn floor_lookup<V>(map: &BTreeMap<DayId, V>, day: DayId) -> Option<&V> {
    map.range(..=day).next_back().map(|(_, value)| value)
}

/// Floor lookup on a single-ledger series, absent treated as zero.
pub fn floor_amount(series: &DailySeries, day: DayId) -> Decimal {
    sanitize(floor_lookup(series, day))
}

/// Floor lookup of one account's value in an account-bucketed series,
/// absent treated as zero.
pub fn floor_account_amount(
    series: &DailyAccountSeries,
    day: DayId,
    account_type: AccountType,
) -> Decimal {
    sanitize(floor_lookup(series, day).and_then(|amounts| amounts.get(&account_type)))
}

/// Output of one `compute_pnl` invocation.
///
/// Derived wholesale from the snapshot; a reload discards the previous
/// report rather than mutating it. The combined cumulative series carries
/// only trading days: a dividend paid on a non-trading day shows up in the
/// cumulative value of the next trading day, not on its own key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlReport {
    /// Mark-to-market PnL of the running position, per ledger per day.
    pub unrealized_by_ledger: BTreeMap<LedgerKey, DailySeries>,
    /// PnL crystallized by sales, per ledger per day.
    pub realized_by_ledger: BTreeMap<LedgerKey, DailySeries>,

    /// Unrealized PnL summed across symbols, per day per account.
    pub unrealized_by_day: DailyAccountSeries,
    /// Realized PnL summed across symbols, per day per account.
    pub realized_by_day: DailyAccountSeries,
    /// Unrealized + realized, per day per account.
    pub combined_by_day: DailyAccountSeries,

    /// Cumulative realized PnL with dividends folded in, per ledger.
    pub realized_with_dividends_by_ledger: BTreeMap<LedgerKey, DailySeries>,
    /// Cumulative realized-with-dividend series across ledgers, defined on
    /// every calendar day by forward-carrying the last known value.
    pub realized_with_dividends_by_day: DailyAccountSeries,

    /// Final running net PnL: cumulative realized-with-dividends plus
    /// point-in-time unrealized, over the combined map's days.
    pub combined_cumulative_by_day: DailyAccountSeries,
}

impl PnlReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest combined cumulative PnL at or before `day`, summed across
    /// account types.
    pub fn combined_cumulative_as_of(&self, day: DayId) -> Decimal {
        floor_lookup(&self.combined_cumulative_by_day, day)
            .map(|amounts| amounts.values().sum())
            .unwrap_or(Decimal::ZERO)
    }
}
