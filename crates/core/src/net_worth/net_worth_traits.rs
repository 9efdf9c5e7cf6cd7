//! Interface the excluded API layer consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{NetWorthSummary, PnlHistoryPoint};
use crate::transactions::AccountType;

/// Read-only projections over one reload generation.
pub trait NetWorthViewTrait: Send + Sync {
    /// Combined cumulative PnL at or before `as_of`, summed across
    /// account types.
    fn latest_pnl(&self, as_of: NaiveDate) -> Decimal;

    /// Total capital currently committed to the market.
    fn invested_capital(&self) -> Decimal;

    /// Both headline scalars for one query date.
    fn summary(&self, as_of: NaiveDate) -> NetWorthSummary;

    /// The combined cumulative curve for one account, ascending by day.
    fn account_history(&self, account_type: AccountType) -> Vec<PnlHistoryPoint>;

    /// The combined cumulative curve summed across accounts, ascending by
    /// day.
    fn combined_history(&self) -> Vec<PnlHistoryPoint>;
}
