use log::{debug, error, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::calendar::{CalendarIndex, DayId};
use crate::dividends::DividendAccumulator;
use crate::errors::{PnlError, Result};
use crate::ledger::{Ledger, LedgerBook, LedgerKey};
use crate::market_data::{MarketDataWarehouseTrait, OutdatedSymbolTableTrait};
use crate::pnl::{
    floor_account_amount, floor_amount, floor_lookup, sanitize, AccountAmounts,
    DailyAccountSeries, PnlReport,
};
use crate::transactions::AccountType;

/// Walks the trading calendar against each ledger and layers realized,
/// unrealized, and dividend-adjusted PnL into a fresh [`PnlReport`].
///
/// The engine is stateless across invocations: every `compute_pnl` call
/// derives a complete report from the given snapshot, and a failure leaves
/// no partial cumulative series behind. A missing price that is excused
/// neither by the outdated-symbol table nor by a dividend-only day is
/// fatal to the whole run, because the cumulative series downstream assume
/// a gapless walk.
pub struct PnlEngine {
    warehouse: Arc<dyn MarketDataWarehouseTrait>,
    outdated: Arc<dyn OutdatedSymbolTableTrait>,
}

impl PnlEngine {
    pub fn new(
        warehouse: Arc<dyn MarketDataWarehouseTrait>,
        outdated: Arc<dyn OutdatedSymbolTableTrait>,
    ) -> Self {
        PnlEngine { warehouse, outdated }
    }

    /// Computes every PnL map flavor for one reload generation.
    pub fn compute_pnl(
        &self,
        book: &LedgerBook,
        dividends: &DividendAccumulator,
    ) -> Result<PnlReport> {
        let mut calendar = CalendarIndex::from_trading_dates(&self.warehouse.trading_dates());
        // Off-market dividend days join the walk but never get price
        // lookups.
        for day in dividends.dividend_days() {
            if let Some(date) = day.to_date() {
                calendar.ensure(date);
            }
        }
        let days: Vec<DayId> = calendar.days().collect();

        let mut report = PnlReport::new();
        for (key, ledger) in book.iter() {
            self.walk_ledger(key, ledger, &days, &calendar, &mut report)?;
        }

        combine_daily(&mut report);
        accumulate_dividend_adjusted(book, dividends, &mut report);
        accumulate_daily_with_dividends(dividends, &days, &mut report);
        finalize_combined_cumulative(&mut report);

        debug!(
            "PnL computed for {} ledgers over {} calendar days",
            book.len(),
            days.len()
        );
        Ok(report)
    }

    /// Walks one ledger across the working calendar.
    ///
    /// The node pointer advances to the last node whose trade date does
    /// not exceed the current day, so transactions accumulate "as of" the
    /// day rather than on exact date matches. The walk for a ledger ends
    /// early only from the SELL branch, when the sale has no successor
    /// node (the position is closed with nothing after it).
    fn walk_ledger(
        &self,
        key: &LedgerKey,
        ledger: &Ledger,
        days: &[DayId],
        calendar: &CalendarIndex,
        report: &mut PnlReport,
    ) -> Result<()> {
        let Some(head) = ledger.head_index() else {
            return Ok(());
        };
        let head_day = ledger.node(head).day();
        let start = days.partition_point(|&day| day < head_day);
        let mut node_index = head;

        for &day in &days[start..] {
            while let Some(next) = ledger.node(node_index).next {
                if ledger.node(next).day() <= day {
                    node_index = next;
                } else {
                    break;
                }
            }
            let node = ledger.node(node_index);
            let date = day
                .to_date()
                .ok_or(PnlError::UnrepresentableDay(day.0))?;

            let Some(price) = self.warehouse.price(&key.symbol, date) else {
                if self.outdated.is_excused(&key.symbol, day) {
                    info!(
                        "no price for outdated symbol {} on {}, skipping",
                        key.symbol, date
                    );
                    continue;
                }
                if !calendar.is_trading_day(day) {
                    debug!(
                        "no price for {} on dividend-only day {}, skipping",
                        key.symbol, date
                    );
                    continue;
                }
                error!(
                    "missing price for {} on {} aborts the PnL computation",
                    key.symbol, date
                );
                return Err(PnlError::MissingPrice {
                    symbol: key.symbol.clone(),
                    date,
                }
                .into());
            };

            let unrealized = (price - node.acb.cost_per_unit) * node.running_quantity;
            record(report, key, day, unrealized, Flavor::Unrealized);

            if node.is_sell() {
                if let Some(prev) = node.prev {
                    let realized =
                        (price - ledger.node(prev).acb.cost_per_unit) * node.transaction.quantity;
                    record(report, key, day, realized, Flavor::Realized);
                }
                if node.next.is_none() {
                    // Position closed with nothing after it.
                    break;
                }
            }
        }
        Ok(())
    }
}

enum Flavor {
    Unrealized,
    Realized,
}

fn record(report: &mut PnlReport, key: &LedgerKey, day: DayId, value: Decimal, flavor: Flavor) {
    let (by_ledger, by_day) = match flavor {
        Flavor::Unrealized => (&mut report.unrealized_by_ledger, &mut report.unrealized_by_day),
        Flavor::Realized => (&mut report.realized_by_ledger, &mut report.realized_by_day),
    };
    by_ledger
        .entry(key.clone())
        .or_default()
        .insert(day, value);
    *by_day
        .entry(day)
        .or_default()
        .entry(key.account_type)
        .or_insert(Decimal::ZERO) += value;
}

/// Combined = unrealized + realized, over the union of their days.
fn combine_daily(report: &mut PnlReport) {
    let mut combined = report.unrealized_by_day.clone();
    for (&day, amounts) in &report.realized_by_day {
        let entry = combined.entry(day).or_default();
        for (&account_type, &value) in amounts {
            *entry.entry(account_type).or_insert(Decimal::ZERO) += value;
        }
    }
    report.combined_by_day = combined;
}

/// Per-ledger dividend-adjusted cumulative realized PnL: a deep copy of
/// the pure realized series, zero baseline at day 0, and each dividend
/// adds its amount plus the cumulative value of the day before (floor
/// lookup, not exact match).
fn accumulate_dividend_adjusted(
    book: &LedgerBook,
    dividends: &DividendAccumulator,
    report: &mut PnlReport,
) {
    for (key, _ledger) in book.iter() {
        let mut cumulative = report
            .realized_by_ledger
            .get(key)
            .cloned()
            .unwrap_or_default();
        cumulative.entry(DayId::ZERO).or_insert(Decimal::ZERO);

        for record in dividends.records_for(&key.symbol, key.account_type) {
            let carried = floor_amount(&cumulative, record.day.pred());
            *cumulative.entry(record.day).or_insert(Decimal::ZERO) += record.amount + carried;
        }

        report
            .realized_with_dividends_by_ledger
            .insert(key.clone(), cumulative);
    }
}

/// Cross-ledger cumulative realized-with-dividend series, defined on
/// every calendar day: yesterday's cumulative + today's dividends +
/// today's pure realized. Days without activity forward-carry unchanged.
fn accumulate_daily_with_dividends(
    dividends: &DividendAccumulator,
    days: &[DayId],
    report: &mut PnlReport,
) {
    report
        .realized_with_dividends_by_day
        .insert(DayId::ZERO, Default::default());

    for &day in days {
        let mut today = floor_lookup_amounts(report, day.pred());
        for account_type in AccountType::KNOWN {
            let dividend = dividends.amount_on(day, account_type);
            let realized = sanitize(
                report
                    .realized_by_day
                    .get(&day)
                    .and_then(|amounts| amounts.get(&account_type)),
            );
            if !dividend.is_zero() || !realized.is_zero() {
                *today.entry(account_type).or_insert(Decimal::ZERO) += dividend + realized;
            }
        }
        report.realized_with_dividends_by_day.insert(day, today);
    }
}

fn floor_lookup_amounts(report: &PnlReport, day: DayId) -> AccountAmounts {
    floor_lookup(&report.realized_with_dividends_by_day, day)
        .cloned()
        .unwrap_or_default()
}

/// Final series: floor lookup of the dividend-adjusted cumulative
/// realized value plus the day's unrealized value, over exactly the
/// combined map's (day, account) pairs. Dividend-only non-trading days
/// are intentionally absent; their jump lands on the next trading day.
fn finalize_combined_cumulative(report: &mut PnlReport) {
    let mut cumulative = DailyAccountSeries::new();
    for (&day, amounts) in &report.combined_by_day {
        let entry: &mut AccountAmounts = cumulative.entry(day).or_default();
        for &account_type in amounts.keys() {
            let carried =
                floor_account_amount(&report.realized_with_dividends_by_day, day, account_type);
            let unrealized = sanitize(
                report
                    .unrealized_by_day
                    .get(&day)
                    .and_then(|a| a.get(&account_type)),
            );
            entry.insert(account_type, carried + unrealized);
        }
    }
    report.combined_cumulative_by_day = cumulative;
}
