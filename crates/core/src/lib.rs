//! Gainbook Core - cost-basis ledger and PnL computation engine.
//!
//! This crate owns the ordered transaction ledger, its adjusted-cost-basis
//! (ACB) algorithm, the calendar-walking PnL computation, and the
//! cumulative aggregation that turns point-in-time PnL into running
//! net-worth curves. Transaction extraction, market-data fetching, and the
//! API surface live behind the traits in `transactions` and `market_data`.

pub mod calendar;
pub mod constants;
pub mod dividends;
pub mod errors;
pub mod ledger;
pub mod market_data;
pub mod net_worth;
pub mod pnl;
pub mod transactions;

// Re-export common types
pub use calendar::DayId;
pub use ledger::{Ledger, LedgerBook, LedgerKey};
pub use pnl::{PnlEngine, PnlReport};
pub use transactions::{AccountType, TradeAction, Transaction};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
