//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::calendar::DayId;

/// Direction of a recorded brokerage transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeAction {
    Buy,
    Sell,
    Dividend,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "BUY",
            TradeAction::Sell => "SELL",
            TradeAction::Dividend => "DIVIDEND",
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tax/ownership bucket that cost basis and PnL are tracked under,
/// independently per instrument. `Unknown` is the unrecognized sentinel
/// and is excluded from every PnL map.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Tfsa,
    Nr,
    Fhsa,
    Ind,
    #[default]
    Unknown,
}

impl AccountType {
    /// The recognized account types, in ledger/report ordering.
    pub const KNOWN: [AccountType; 4] = [
        AccountType::Tfsa,
        AccountType::Nr,
        AccountType::Fhsa,
        AccountType::Ind,
    ];

    pub fn is_known(&self) -> bool {
        !matches!(self, AccountType::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Tfsa => "TFSA",
            AccountType::Nr => "NR",
            AccountType::Fhsa => "FHSA",
            AccountType::Ind => "IND",
            AccountType::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for AccountType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TFSA" => Ok(AccountType::Tfsa),
            "NR" => Ok(AccountType::Nr),
            "FHSA" => Ok(AccountType::Fhsa),
            "IND" => Ok(AccountType::Ind),
            _ => Ok(AccountType::Unknown),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One brokerage transaction, immutable once recorded.
///
/// BUY/SELL rows carry a positive quantity and a per-unit price; DIVIDEND
/// rows carry the cash `amount` instead. `order_id` is the brokerage order
/// id; dividends without one are rejected at ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub order_id: String,
    pub symbol: String,
    pub account_type: AccountType,
    pub action: TradeAction,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    pub trade_date: NaiveDate,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_date: Option<NaiveDate>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Transaction {
    /// The compact day encoding of the trade date.
    pub fn day(&self) -> DayId {
        DayId::from_date(self.trade_date)
    }

    /// Trade value in currency units (quantity x price).
    pub fn notional(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    /// Notional signed by direction: BUY positive, SELL negative,
    /// dividends contribute nothing to invested capital.
    pub fn signed_notional(&self) -> Decimal {
        match self.action {
            TradeAction::Buy => self.notional(),
            TradeAction::Sell => -self.notional(),
            TradeAction::Dividend => Decimal::ZERO,
        }
    }

    /// Dividend cash amount, zero when absent.
    pub fn dividend_amount(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }
}
