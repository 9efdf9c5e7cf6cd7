//! Seam to the excluded market-data warehouse.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Pre-fetched market data for one reload generation.
///
/// All prices and the trading calendar are assumed fetched before the PnL
/// walk begins; nothing behind this trait blocks on I/O during the walk.
pub trait MarketDataWarehouseTrait: Send + Sync {
    /// Closing price for `symbol` on `date`, or `None` when the warehouse
    /// holds no quote for that day.
    fn price(&self, symbol: &str, date: NaiveDate) -> Option<Decimal>;

    /// The trading calendar, sorted ascending.
    fn trading_dates(&self) -> Vec<NaiveDate>;
}
