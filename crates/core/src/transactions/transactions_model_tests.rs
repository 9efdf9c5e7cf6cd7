#[cfg(test)]
mod tests {
    use crate::transactions::{AccountType, TradeAction, Transaction};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn buy(qty: Decimal, price: Decimal) -> Transaction {
        Transaction {
            order_id: "ORD-1".to_string(),
            symbol: "XEQT".to_string(),
            account_type: AccountType::Tfsa,
            action: TradeAction::Buy,
            quantity: qty,
            unit_price: price,
            amount: None,
            trade_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            settlement_date: None,
            metadata: None,
        }
    }

    #[test]
    fn signed_notional_follows_direction() {
        let mut tx = buy(dec!(10), dec!(5.25));
        assert_eq!(tx.notional(), dec!(52.50));
        assert_eq!(tx.signed_notional(), dec!(52.50));

        tx.action = TradeAction::Sell;
        assert_eq!(tx.signed_notional(), dec!(-52.50));

        tx.action = TradeAction::Dividend;
        assert_eq!(tx.signed_notional(), Decimal::ZERO);
    }

    #[test]
    fn dividend_amount_defaults_to_zero() {
        let mut tx = buy(Decimal::ZERO, Decimal::ZERO);
        tx.action = TradeAction::Dividend;
        assert_eq!(tx.dividend_amount(), Decimal::ZERO);
        tx.amount = Some(dec!(12.34));
        assert_eq!(tx.dividend_amount(), dec!(12.34));
    }

    #[test]
    fn account_type_parses_known_buckets() {
        assert_eq!(AccountType::from_str("TFSA"), Ok(AccountType::Tfsa));
        assert_eq!(AccountType::from_str("fhsa"), Ok(AccountType::Fhsa));
        assert_eq!(AccountType::from_str("MARGIN"), Ok(AccountType::Unknown));
        assert!(!AccountType::Unknown.is_known());
        assert!(AccountType::KNOWN.iter().all(AccountType::is_known));
    }

    #[test]
    fn transaction_serializes_camel_case() {
        let tx = buy(dec!(1), dec!(2));
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["orderId"], "ORD-1");
        assert_eq!(json["accountType"], "TFSA");
        assert_eq!(json["action"], "BUY");
        assert!(json.get("settlementDate").is_none());
    }
}
