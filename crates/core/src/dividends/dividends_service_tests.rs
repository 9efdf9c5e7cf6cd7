#[cfg(test)]
mod tests {
    use crate::calendar::DayId;
    use crate::dividends::DividendAccumulator;
    use crate::transactions::{AccountType, PortfolioSourceTrait, TradeAction, Transaction};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn day(y: i32, m: u32, dd: u32) -> DayId {
        DayId::from_date(d(y, m, dd))
    }

    fn dividend(
        order_id: &str,
        symbol: &str,
        account: AccountType,
        amount: Decimal,
        date: NaiveDate,
    ) -> Transaction {
        Transaction {
            order_id: order_id.to_string(),
            symbol: symbol.to_string(),
            account_type: account,
            action: TradeAction::Dividend,
            quantity: Decimal::ZERO,
            unit_price: Decimal::ZERO,
            amount: Some(amount),
            trade_date: date,
            settlement_date: None,
            metadata: None,
        }
    }

    struct MockSource {
        dividends: Vec<Transaction>,
    }

    impl PortfolioSourceTrait for MockSource {
        fn trades(&self, _action: TradeAction) -> Vec<Transaction> {
            Vec::new()
        }

        fn dividends(&self, account_type: AccountType) -> Vec<Transaction> {
            self.dividends
                .iter()
                .filter(|t| t.account_type == account_type)
                .cloned()
                .collect()
        }
    }

    #[test]
    fn aggregates_sum_across_symbols_per_day_and_account() {
        let source = MockSource {
            dividends: vec![
                dividend("D1", "XEQT", AccountType::Tfsa, dec!(10), d(2024, 2, 15)),
                dividend("D2", "VFV", AccountType::Tfsa, dec!(4), d(2024, 2, 15)),
                dividend("D3", "XEQT", AccountType::Ind, dec!(7), d(2024, 2, 15)),
            ],
        };
        let mut accumulator = DividendAccumulator::new();
        accumulator.populate(&source);

        assert_eq!(accumulator.amount_on(day(2024, 2, 15), AccountType::Tfsa), dec!(14));
        assert_eq!(accumulator.amount_on(day(2024, 2, 15), AccountType::Ind), dec!(7));
        assert_eq!(accumulator.amount_on(day(2024, 2, 15), AccountType::Fhsa), dec!(0));
    }

    #[test]
    fn empty_order_id_is_rejected_not_aggregated() {
        let source = MockSource {
            dividends: vec![
                dividend("", "XEQT", AccountType::Tfsa, dec!(10), d(2024, 2, 15)),
                dividend("D2", "XEQT", AccountType::Tfsa, dec!(4), d(2024, 3, 15)),
            ],
        };
        let mut accumulator = DividendAccumulator::new();
        accumulator.populate(&source);

        assert_eq!(accumulator.records().count(), 1);
        assert_eq!(accumulator.amount_on(day(2024, 2, 15), AccountType::Tfsa), dec!(0));
        assert_eq!(accumulator.amount_on(day(2024, 3, 15), AccountType::Tfsa), dec!(4));
    }

    #[test]
    fn duplicate_keys_overwrite_the_earlier_record() {
        let source = MockSource {
            dividends: vec![
                dividend("D1", "XEQT", AccountType::Tfsa, dec!(10), d(2024, 2, 15)),
                dividend("D1-CORRECTED", "XEQT", AccountType::Tfsa, dec!(12), d(2024, 2, 15)),
            ],
        };
        let mut accumulator = DividendAccumulator::new();
        accumulator.populate(&source);

        assert_eq!(accumulator.records().count(), 1);
        assert_eq!(accumulator.amount_on(day(2024, 2, 15), AccountType::Tfsa), dec!(12));
    }

    #[test]
    fn cumulative_series_has_a_zero_baseline_and_running_sums() {
        let source = MockSource {
            dividends: vec![
                dividend("D1", "XEQT", AccountType::Tfsa, dec!(10), d(2024, 2, 15)),
                dividend("D2", "XEQT", AccountType::Tfsa, dec!(5), d(2024, 5, 15)),
            ],
        };
        let mut accumulator = DividendAccumulator::new();
        accumulator.populate(&source);

        let cumulative = accumulator.cumulative();
        assert!(cumulative.get(&DayId::ZERO).unwrap().is_empty());
        assert_eq!(
            cumulative.get(&day(2024, 2, 15)).unwrap()[&AccountType::Tfsa],
            dec!(10)
        );
        assert_eq!(
            cumulative.get(&day(2024, 5, 15)).unwrap()[&AccountType::Tfsa],
            dec!(15)
        );
    }

    #[test]
    fn repopulating_replaces_the_previous_generation() {
        let first = MockSource {
            dividends: vec![dividend("D1", "XEQT", AccountType::Tfsa, dec!(10), d(2024, 2, 15))],
        };
        let second = MockSource {
            dividends: vec![dividend("D9", "VFV", AccountType::Ind, dec!(3), d(2024, 6, 1))],
        };

        let mut accumulator = DividendAccumulator::new();
        accumulator.populate(&first);
        accumulator.populate(&second);

        assert_eq!(accumulator.records().count(), 1);
        assert_eq!(accumulator.amount_on(day(2024, 2, 15), AccountType::Tfsa), dec!(0));
        assert_eq!(accumulator.amount_on(day(2024, 6, 1), AccountType::Ind), dec!(3));
        assert_eq!(accumulator.dividend_days().len(), 1);
    }

    #[test]
    fn records_for_filters_one_ledger_key() {
        let source = MockSource {
            dividends: vec![
                dividend("D1", "XEQT", AccountType::Tfsa, dec!(10), d(2024, 2, 15)),
                dividend("D2", "XEQT", AccountType::Ind, dec!(7), d(2024, 2, 15)),
                dividend("D3", "XEQT", AccountType::Tfsa, dec!(5), d(2024, 5, 15)),
            ],
        };
        let mut accumulator = DividendAccumulator::new();
        accumulator.populate(&source);

        let days: Vec<_> = accumulator
            .records_for("XEQT", AccountType::Tfsa)
            .map(|r| r.day)
            .collect();
        assert_eq!(days, vec![day(2024, 2, 15), day(2024, 5, 15)]);
    }
}
