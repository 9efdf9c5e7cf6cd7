//! Net worth view implementation.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::net_worth_model::{NetWorthSummary, PnlHistoryPoint};
use super::net_worth_traits::NetWorthViewTrait;
use crate::calendar::DayId;
use crate::constants::{DECIMAL_PRECISION, DISPLAY_DECIMAL_PRECISION};
use crate::ledger::LedgerBook;
use crate::pnl::{DailyAccountSeries, PnlReport};
use crate::transactions::AccountType;

/// Read-only aggregate view over one reload generation.
///
/// Holds the generation's report and book behind `Arc`s and never mutates
/// them; a reload builds a new service instance instead of patching this
/// one.
pub struct NetWorthService {
    report: Arc<PnlReport>,
    book: Arc<LedgerBook>,
}

impl NetWorthService {
    pub fn new(report: Arc<PnlReport>, book: Arc<LedgerBook>) -> Self {
        NetWorthService { report, book }
    }

    /// The full per-day, per-account combined cumulative series.
    pub fn combined_cumulative(&self) -> &DailyAccountSeries {
        &self.report.combined_cumulative_by_day
    }

    /// The underlying report, for consumers that need the other PnL map
    /// flavors (pure unrealized, pure realized, combined,
    /// dividend-adjusted cumulative realized).
    pub fn report(&self) -> &PnlReport {
        &self.report
    }

    fn history_points<F>(&self, value_of: F) -> Vec<PnlHistoryPoint>
    where
        F: Fn(&crate::pnl::AccountAmounts) -> Option<Decimal>,
    {
        self.report
            .combined_cumulative_by_day
            .iter()
            .filter_map(|(&day, amounts)| {
                value_of(amounts).map(|value| PnlHistoryPoint {
                    day,
                    date: day.to_date(),
                    value: value.round_dp(DECIMAL_PRECISION),
                })
            })
            .collect()
    }
}

impl NetWorthViewTrait for NetWorthService {
    fn latest_pnl(&self, as_of: NaiveDate) -> Decimal {
        self.report
            .combined_cumulative_as_of(DayId::from_date(as_of))
            .round_dp(DECIMAL_PRECISION)
    }

    fn invested_capital(&self) -> Decimal {
        self.book.invested_capital().round_dp(DECIMAL_PRECISION)
    }

    fn summary(&self, as_of: NaiveDate) -> NetWorthSummary {
        let summary = NetWorthSummary {
            latest_pnl: self.latest_pnl(as_of).round_dp(DISPLAY_DECIMAL_PRECISION),
            invested_capital: self
                .invested_capital()
                .round_dp(DISPLAY_DECIMAL_PRECISION),
            as_of,
        };
        debug!(
            "net worth summary as of {}: pnl {}, invested {}",
            as_of, summary.latest_pnl, summary.invested_capital
        );
        summary
    }

    fn account_history(&self, account_type: AccountType) -> Vec<PnlHistoryPoint> {
        self.history_points(|amounts| amounts.get(&account_type).copied())
    }

    fn combined_history(&self) -> Vec<PnlHistoryPoint> {
        self.history_points(|amounts| Some(amounts.values().sum()))
    }
}
