//! Core error types for the cost-basis and PnL engine.
//!
//! Collaborator-specific failures (extraction, REST wiring, persistence)
//! are out of scope; the engine only surfaces the structural and data-gap
//! conditions of its own algorithms.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
///
/// A fatal `Err` means the current reload generation is inconsistent and
/// the orchestrating reload service must clear state and re-run the whole
/// pipeline; the engine never patches partial state.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Ledger construction failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error("PnL computation failed: {0}")]
    Pnl(#[from] PnlError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Structural violations detected while building a transaction ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A SELL has no strictly earlier node to attach after, which would
    /// imply a net-short position. The ledger must always start with a BUY.
    #[error(
        "short selling is not supported: SELL of {quantity} {symbol} on {date} has no earlier holding"
    )]
    ShortSale {
        symbol: String,
        date: NaiveDate,
        quantity: Decimal,
    },

    /// Only BUY and SELL transactions are ledger blocks; dividends go
    /// through the dividend accumulator instead.
    #[error("transaction {order_id} with action {action} cannot be appended to a ledger")]
    UnsupportedAction { order_id: String, action: String },
}

/// Data-gap conditions detected during the calendar walk.
#[derive(Error, Debug)]
pub enum PnlError {
    /// A market price is absent and neither the outdated-symbol table nor
    /// the dividend-day set excuses the gap. Fatal to the whole run.
    #[error("missing market price for {symbol} on {date} with no outdated-symbol or dividend-day excuse")]
    MissingPrice { symbol: String, date: NaiveDate },

    /// A calendar day produced by the walk could not be mapped back to a
    /// calendar date.
    #[error("day {0} is outside the representable calendar range")]
    UnrepresentableDay(i64),
}
