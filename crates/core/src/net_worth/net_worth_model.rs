use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::DayId;

/// One point of a cumulative PnL curve, shaped for the API layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlHistoryPoint {
    pub day: DayId,
    pub date: Option<NaiveDate>,
    pub value: Decimal,
}

/// Headline scalars of one reload generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSummary {
    /// Combined cumulative PnL as of the query date (floor lookup).
    pub latest_pnl: Decimal,
    /// Signed sum of all transaction notionals: BUY positive, SELL
    /// negative.
    pub invested_capital: Decimal,
    pub as_of: NaiveDate,
}
