use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::DayId;
use crate::transactions::AccountType;

/// Identity of one dividend payment. Duplicate keys overwrite: the
/// snapshot is authoritative and re-delivered rows replace earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendKey {
    pub symbol: String,
    pub account_type: AccountType,
    pub day: DayId,
}

/// One recorded dividend payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendRecord {
    pub symbol: String,
    pub account_type: AccountType,
    pub day: DayId,
    pub amount: Decimal,
    /// Source brokerage order id; records without one never get this far.
    pub order_id: String,
}
