#[cfg(test)]
mod tests {
    use crate::calendar::DayId;
    use crate::pnl::{
        floor_account_amount, floor_amount, floor_lookup, sanitize, DailyAccountSeries,
        DailySeries, PnlReport,
    };
    use crate::transactions::AccountType;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn sanitize_maps_absent_to_zero() {
        assert_eq!(sanitize(None), Decimal::ZERO);
        assert_eq!(sanitize(Some(&dec!(1.5))), dec!(1.5));
    }

    #[test]
    fn floor_lookup_returns_the_last_known_value() {
        let mut series = DailySeries::new();
        series.insert(DayId(10), dec!(1));
        series.insert(DayId(20), dec!(2));

        assert_eq!(floor_lookup(&series, DayId(5)), None);
        assert_eq!(floor_lookup(&series, DayId(10)), Some(&dec!(1)));
        assert_eq!(floor_lookup(&series, DayId(15)), Some(&dec!(1)));
        assert_eq!(floor_lookup(&series, DayId(25)), Some(&dec!(2)));

        assert_eq!(floor_amount(&series, DayId(5)), Decimal::ZERO);
        assert_eq!(floor_amount(&series, DayId(15)), dec!(1));
    }

    #[test]
    fn floor_account_amount_reads_one_bucket() {
        let mut series = DailyAccountSeries::new();
        series
            .entry(DayId(10))
            .or_default()
            .insert(AccountType::Tfsa, dec!(7));

        assert_eq!(
            floor_account_amount(&series, DayId(12), AccountType::Tfsa),
            dec!(7)
        );
        assert_eq!(
            floor_account_amount(&series, DayId(12), AccountType::Ind),
            Decimal::ZERO
        );
        assert_eq!(
            floor_account_amount(&series, DayId(9), AccountType::Tfsa),
            Decimal::ZERO
        );
    }

    #[test]
    fn combined_cumulative_as_of_sums_accounts_at_the_floor() {
        let mut report = PnlReport::new();
        let entry = report
            .combined_cumulative_by_day
            .entry(DayId(100))
            .or_default();
        entry.insert(AccountType::Tfsa, dec!(10));
        entry.insert(AccountType::Ind, dec!(5));

        assert_eq!(report.combined_cumulative_as_of(DayId(100)), dec!(15));
        assert_eq!(report.combined_cumulative_as_of(DayId(500)), dec!(15));
        assert_eq!(report.combined_cumulative_as_of(DayId(99)), Decimal::ZERO);
    }
}
