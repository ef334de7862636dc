//! Expense aggregation for the overview tables and charts.
//!
//! Both groupings are single passes that keep keys in insertion order
//! of first occurrence, so the overview page lists categories and
//! months in the order they first appear in the expense file.

use crate::expense::Expense;

/// Sum expense amounts per category label.
pub fn totals_by_category(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals = Vec::new();

    for expense in expenses {
        accumulate(&mut totals, &expense.category, expense.amount);
    }

    totals
}

/// Sum expense amounts per month.
///
/// The month key is the first seven characters of the date string,
/// which is `YYYY-MM` for well-formed dates. Malformed dates are not
/// rejected; a short or odd date string just produces an odd key.
pub fn totals_by_month(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals = Vec::new();

    for expense in expenses {
        let month: String = expense.date.chars().take(7).collect();
        accumulate(&mut totals, &month, expense.amount);
    }

    totals
}

/// Add `amount` under `key`, appending the key on first sight.
///
/// Linear scan per record; the expense list of a two-person tracker is
/// small enough that a map is not worth losing the insertion order
/// over.
fn accumulate(totals: &mut Vec<(String, f64)>, key: &str, amount: f64) {
    match totals.iter_mut().find(|(existing, _)| existing == key) {
        Some((_, sum)) => *sum += amount,
        None => totals.push((key.to_owned(), amount)),
    }
}

#[cfg(test)]
mod aggregation_tests {
    use crate::{
        aggregation::{totals_by_category, totals_by_month},
        config::SplitConfig,
        expense::Expense,
        settlement::settle,
    };

    fn expense(amount: f64, date: &str, category: &str) -> Expense {
        Expense {
            id: 0,
            date: date.to_owned(),
            description: "test".to_owned(),
            amount,
            category: category.to_owned(),
            paid_by: "Alice".to_owned(),
            share_a: Some(60),
            share_b: Some(40),
        }
    }

    #[test]
    fn categories_keep_first_occurrence_order() {
        let expenses = [
            expense(10.0, "2025-01-05", "Tools"),
            expense(20.0, "2025-01-06", "Heating"),
            expense(5.0, "2025-01-07", "Tools"),
        ];

        let totals = totals_by_category(&expenses);

        assert_eq!(
            totals,
            vec![("Tools".to_owned(), 15.0), ("Heating".to_owned(), 20.0)]
        );
    }

    #[test]
    fn months_truncate_dates_to_seven_characters() {
        let expenses = [
            expense(10.0, "2025-01-05", "Tools"),
            expense(20.0, "2025-01-28", "Tools"),
            expense(40.0, "2025-02-01", "Tools"),
        ];

        let totals = totals_by_month(&expenses);

        assert_eq!(
            totals,
            vec![("2025-01".to_owned(), 30.0), ("2025-02".to_owned(), 40.0)]
        );
    }

    #[test]
    fn malformed_dates_group_under_their_truncated_key() {
        let expenses = [
            expense(10.0, "soon", "Tools"),
            expense(5.0, "soon", "Tools"),
            expense(1.0, "2025-13-99 or so", "Tools"),
        ];

        let totals = totals_by_month(&expenses);

        assert_eq!(
            totals,
            vec![("soon".to_owned(), 15.0), ("2025-13".to_owned(), 1.0)]
        );
    }

    #[test]
    fn empty_list_aggregates_to_nothing() {
        assert!(totals_by_category(&[]).is_empty());
        assert!(totals_by_month(&[]).is_empty());
    }

    #[test]
    fn aggregations_sum_to_the_settlement_total() {
        let expenses = [
            expense(10.0, "2025-01-05", "Tools"),
            expense(20.5, "2025-02-06", "Heating"),
            expense(5.25, "2025-02-07", "Fuel"),
        ];

        let settlement = settle(&expenses, &SplitConfig::default());
        let category_total: f64 = totals_by_category(&expenses)
            .iter()
            .map(|(_, sum)| sum)
            .sum();
        let month_total: f64 = totals_by_month(&expenses).iter().map(|(_, sum)| sum).sum();

        assert_eq!(category_total, settlement.total);
        assert_eq!(month_total, settlement.total);
    }
}
