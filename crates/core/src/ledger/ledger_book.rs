use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::Result;
use crate::ledger::Ledger;
use crate::transactions::{AccountType, PortfolioSourceTrait, TradeAction, Transaction};

/// Identity of one ledger: an instrument held inside one account bucket.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKey {
    pub symbol: String,
    pub account_type: AccountType,
}

impl LedgerKey {
    pub fn new(symbol: &str, account_type: AccountType) -> Self {
        LedgerKey {
            symbol: symbol.to_string(),
            account_type,
        }
    }
}

/// All ledgers of one reload generation, keyed by (symbol, account type).
///
/// Rebuilt wholesale from a transaction snapshot on every reload; there is
/// no incremental update path.
#[derive(Debug, Clone, Default)]
pub struct LedgerBook {
    ledgers: BTreeMap<LedgerKey, Ledger>,
}

impl LedgerBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the book from a snapshot: all BUYs first so every SELL finds
    /// its chronological predecessors in place, then the ACB pass over
    /// every ledger.
    ///
    /// Transactions under the unrecognized account sentinel are logged and
    /// dropped; they never reach a ledger or a PnL map. A SELL that would
    /// go net-short aborts the build.
    pub fn populate(source: &dyn PortfolioSourceTrait) -> Result<Self> {
        let mut book = LedgerBook::new();

        for transaction in source.trades(TradeAction::Buy) {
            book.add(transaction)?;
        }
        for transaction in source.trades(TradeAction::Sell) {
            book.add(transaction)?;
        }

        for (key, ledger) in book.ledgers.iter_mut() {
            ledger.compute_acb();
            debug!(
                "computed ACB for {} [{}]: {} blocks",
                key.symbol,
                key.account_type,
                ledger.len()
            );
        }
        Ok(book)
    }

    fn add(&mut self, transaction: Transaction) -> Result<()> {
        if !transaction.account_type.is_known() {
            warn!(
                "dropping transaction {} for {}: unrecognized account type",
                transaction.order_id, transaction.symbol
            );
            return Ok(());
        }
        let key = LedgerKey::new(&transaction.symbol, transaction.account_type);
        self.ledgers
            .entry(key)
            .or_default()
            .add_block(transaction)?;
        Ok(())
    }

    pub fn get(&self, key: &LedgerKey) -> Option<&Ledger> {
        self.ledgers.get(key)
    }

    /// Ledgers in deterministic (symbol, account) order.
    pub fn iter(&self) -> impl Iterator<Item = (&LedgerKey, &Ledger)> {
        self.ledgers.iter()
    }

    pub fn len(&self) -> usize {
        self.ledgers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    /// Signed sum of all transaction notionals: BUY positive, SELL
    /// negative. This is the capital currently committed to the market.
    pub fn invested_capital(&self) -> Decimal {
        self.ledgers
            .values()
            .flat_map(|ledger| ledger.iter())
            .map(|node| node.transaction.signed_notional())
            .sum()
    }
}
