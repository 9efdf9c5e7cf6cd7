//! Seam to the excluded extraction collaborators.

use super::{AccountType, TradeAction, Transaction};

/// Snapshot source of brokerage transactions for one reload generation.
///
/// Implemented by the CSV/URL extraction layer outside this crate; tests
/// use an in-memory implementation. The engine reads the snapshot once per
/// reload and never mutates it.
pub trait PortfolioSourceTrait: Send + Sync {
    /// All trade transactions with the given action. BUY rows must come
    /// back in non-decreasing trade-date order, because the ledger appends
    /// them as delivered; SELL rows may arrive in any order.
    fn trades(&self, action: TradeAction) -> Vec<Transaction>;

    /// All dividend transactions recorded under the given account type.
    fn dividends(&self, account_type: AccountType) -> Vec<Transaction>;
}
