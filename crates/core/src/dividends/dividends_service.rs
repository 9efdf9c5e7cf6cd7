use log::{debug, warn};
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::calendar::DayId;
use crate::dividends::{DividendKey, DividendRecord};
use crate::transactions::{AccountType, PortfolioSourceTrait};

/// Per-date, per-account dividend amounts.
pub type DividendsByDay = BTreeMap<DayId, HashMap<AccountType, Decimal>>;

/// Builder that owns all dividend-derived maps for one reload generation.
///
/// Populated once from the portfolio snapshot and discarded on reload.
/// Dividend days are deliberately NOT merged into the trading calendar
/// here: the PnL engine later uses "dividend day but not trading day" to
/// tell an off-market payment apart from a real data gap.
#[derive(Debug, Clone, Default)]
pub struct DividendAccumulator {
    records: BTreeMap<DividendKey, DividendRecord>,
    by_day: DividendsByDay,
    cumulative: DividendsByDay,
}

impl DividendAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests every dividend transaction of the snapshot.
    ///
    /// Rows with an empty order id are rejected and logged; they never
    /// reach the aggregates. Rows with a duplicate (symbol, account, day)
    /// key overwrite the earlier record before aggregation, so the sums
    /// always reflect the last delivered row.
    pub fn populate(&mut self, source: &dyn PortfolioSourceTrait) {
        self.records.clear();
        self.by_day.clear();
        self.cumulative.clear();

        for account_type in AccountType::KNOWN {
            for transaction in source.dividends(account_type) {
                if transaction.order_id.is_empty() {
                    warn!(
                        "rejecting dividend for {} [{}] on {}: empty order id",
                        transaction.symbol, account_type, transaction.trade_date
                    );
                    continue;
                }
                let record = DividendRecord {
                    symbol: transaction.symbol.clone(),
                    account_type,
                    day: transaction.day(),
                    amount: transaction.dividend_amount(),
                    order_id: transaction.order_id.clone(),
                };
                let key = DividendKey {
                    symbol: record.symbol.clone(),
                    account_type,
                    day: record.day,
                };
                self.records.insert(key, record);
            }
        }

        self.rebuild_aggregates();
        debug!(
            "dividend accumulator populated: {} records over {} days",
            self.records.len(),
            self.by_day.len()
        );
    }

    /// Rebuilds the per-day aggregate (sum across symbols) and the
    /// cumulative series with its zero baseline at day 0.
    fn rebuild_aggregates(&mut self) {
        for record in self.records.values() {
            *self
                .by_day
                .entry(record.day)
                .or_default()
                .entry(record.account_type)
                .or_insert(Decimal::ZERO) += record.amount;
        }

        let mut running: HashMap<AccountType, Decimal> = HashMap::new();
        self.cumulative.insert(DayId::ZERO, running.clone());
        for (&day, amounts) in &self.by_day {
            for (&account_type, &amount) in amounts {
                *running.entry(account_type).or_insert(Decimal::ZERO) += amount;
            }
            self.cumulative.insert(day, running.clone());
        }
    }

    /// All recorded payments, ordered by (symbol, account, day).
    pub fn records(&self) -> impl Iterator<Item = &DividendRecord> {
        self.records.values()
    }

    /// Payments for one (symbol, account) pair, ascending by day. Keys
    /// order by (symbol, account type, day), so this is one range scan.
    pub fn records_for(
        &self,
        symbol: &str,
        account_type: AccountType,
    ) -> impl Iterator<Item = &DividendRecord> {
        let start = DividendKey {
            symbol: symbol.to_string(),
            account_type,
            day: DayId(i64::MIN),
        };
        let end = DividendKey {
            symbol: symbol.to_string(),
            account_type,
            day: DayId::END_OF_TIME,
        };
        self.records.range(start..=end).map(|(_, record)| record)
    }

    /// Per-day dividend sums across symbols.
    pub fn by_day(&self) -> &DividendsByDay {
        &self.by_day
    }

    /// Cumulative per-day dividend sums, zero baseline at day 0.
    pub fn cumulative(&self) -> &DividendsByDay {
        &self.cumulative
    }

    /// The distinct days any dividend was paid on.
    pub fn dividend_days(&self) -> BTreeSet<DayId> {
        self.by_day.keys().copied().collect()
    }

    /// Dividend amount for one (day, account), zero when absent.
    pub fn amount_on(&self, day: DayId, account_type: AccountType) -> Decimal {
        self.by_day
            .get(&day)
            .and_then(|amounts| amounts.get(&account_type))
            .copied()
            .unwrap_or_else(Decimal::zero)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
