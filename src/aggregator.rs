// Aggregator - reduces a statement to scalar totals
// Decimal arithmetic throughout; every sum starts at the additive identity

use chrono::{Datelike, Month};
use rust_decimal::Decimal;

use crate::record::Transaction;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Sum of all amounts in the statement
///
/// Starts at zero, so an empty statement totals zero rather than erroring.
pub fn total(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::ZERO, |acc, tx| acc + tx.amount)
}

/// Sum of amounts for transactions dated in the given calendar month
///
/// Month-of-year semantics: a January 2023 and a January 2024 transaction
/// both count toward `Month::January`. Transactions outside the month do
/// not affect the result.
pub fn total_for_month(transactions: &[Transaction], month: Month) -> Decimal {
    let month_number = month.number_from_month();

    transactions
        .iter()
        .filter(|tx| tx.date.month() == month_number)
        .fold(Decimal::ZERO, |acc, tx| acc + tx.amount)
}

/// Per-month totals in calendar order, covering only months that appear
/// in the statement
pub fn summarize_by_month(transactions: &[Transaction]) -> Vec<(Month, Decimal)> {
    let mut summary = Vec::new();

    for month in MONTHS {
        let month_number = month.number_from_month();
        let present = transactions
            .iter()
            .any(|tx| tx.date.month() == month_number);

        if present {
            summary.push((month, total_for_month(transactions, month)));
        }
    }

    summary
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn tx(year: i32, month: u32, day: u32, amount: Decimal) -> Transaction {
        Transaction::new(NaiveDate::from_ymd_opt(year, month, day).unwrap(), amount)
    }

    #[test]
    fn test_empty_statement_totals_zero() {
        assert_eq!(total(&[]), Decimal::ZERO);
        assert_eq!(total_for_month(&[], Month::January), Decimal::ZERO);
    }

    #[test]
    fn test_month_total_ignores_other_months() {
        let statement = vec![
            tx(2024, 1, 15, dec!(100.0)),
            tx(2024, 2, 20, dec!(50.0)),
        ];

        assert_eq!(total_for_month(&statement, Month::January), dec!(100.0));
        assert_eq!(total_for_month(&statement, Month::February), dec!(50.0));
        assert_eq!(total_for_month(&statement, Month::March), Decimal::ZERO);
    }

    #[test]
    fn test_month_total_spans_years() {
        let statement = vec![
            tx(2023, 1, 10, dec!(25.50)),
            tx(2024, 1, 10, dec!(74.50)),
        ];

        assert_eq!(total_for_month(&statement, Month::January), dec!(100.00));
    }

    #[test]
    fn test_debits_reduce_the_total() {
        let statement = vec![
            tx(2024, 1, 5, dec!(200.00)),
            tx(2024, 1, 6, dec!(-55.25)),
        ];

        assert_eq!(total(&statement), dec!(144.75));
    }

    #[test]
    fn test_summarize_by_month_in_calendar_order() {
        let statement = vec![
            tx(2024, 3, 1, dec!(30.0)),
            tx(2024, 1, 1, dec!(10.0)),
            tx(2024, 3, 2, dec!(5.0)),
        ];

        let summary = summarize_by_month(&statement);

        assert_eq!(
            summary,
            vec![
                (Month::January, dec!(10.0)),
                (Month::March, dec!(35.0)),
            ]
        );
    }
}
