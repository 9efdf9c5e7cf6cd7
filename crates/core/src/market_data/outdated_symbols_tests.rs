#[cfg(test)]
mod tests {
    use crate::calendar::DayId;
    use crate::market_data::{OutdatedSymbolTable, OutdatedSymbolTableTrait};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> DayId {
        DayId::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn delisted_symbol_is_excused_forever_after() {
        let mut table = OutdatedSymbolTable::new();
        table.add_delisted("ACQ", day(2022, 6, 30));

        assert!(table.contains("ACQ"));
        assert_eq!(table.last_listed_date("ACQ"), Some(day(2022, 6, 30)));
        assert!(table.is_excused("ACQ", day(2022, 6, 30)));
        assert!(table.is_excused("ACQ", day(2030, 1, 1)));
        assert!(!table.is_excused("ACQ", day(2022, 6, 29)));
    }

    #[test]
    fn bounded_gap_is_excused_only_inside_the_range() {
        let mut table = OutdatedSymbolTable::new();
        table.add_range("HALT", day(2023, 2, 1), day(2023, 2, 15));

        assert!(table.is_excused("HALT", day(2023, 2, 1)));
        assert!(table.is_excused("HALT", day(2023, 2, 15)));
        assert!(!table.is_excused("HALT", day(2023, 2, 16)));
    }

    #[test]
    fn last_listed_date_reports_the_final_range() {
        let mut table = OutdatedSymbolTable::new();
        table.add_delisted("GONE", day(2024, 1, 10));
        table.add_range("GONE", day(2023, 5, 1), day(2023, 5, 5));

        // Ranges are kept sorted by start, so the open-ended one is last.
        assert_eq!(table.last_listed_date("GONE"), Some(day(2024, 1, 10)));
        assert!(table.is_excused("GONE", day(2023, 5, 3)));
        assert!(!table.is_excused("GONE", day(2023, 6, 1)));
    }

    #[test]
    fn unknown_symbol_is_never_excused() {
        let table = OutdatedSymbolTable::new();
        assert!(!table.contains("XEQT"));
        assert_eq!(table.last_listed_date("XEQT"), None);
        assert!(!table.is_excused("XEQT", day(2024, 1, 2)));
    }
}
