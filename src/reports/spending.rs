//! Spending aggregations
//!
//! Pure functions computing sums, counts and grouped totals over a sequence
//! of expenses. Nothing here mutates the ledger or touches the console.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::models::{normalize_category, Expense, Money};

/// Sum of all expense amounts; zero for an empty sequence
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum and count of expenses in the given category
///
/// The label is title-case normalized before matching, so "food" and "Food"
/// address the same category. Returns `(0, 0)` when nothing matches.
pub fn total_by_category(expenses: &[Expense], category: &str) -> (Money, usize) {
    let label = normalize_category(category);
    expenses
        .iter()
        .filter(|e| e.category == label)
        .fold((Money::zero(), 0), |(sum, count), e| {
            (sum + e.amount, count + 1)
        })
}

/// Distinct category labels, sorted
pub fn categories(expenses: &[Expense]) -> BTreeSet<String> {
    expenses.iter().map(|e| e.category.clone()).collect()
}

/// Total spending per day, in ascending chronological order
pub fn spending_by_day(expenses: &[Expense]) -> BTreeMap<NaiveDate, Money> {
    let mut daily = BTreeMap::new();
    for expense in expenses {
        *daily.entry(expense.date).or_insert_with(Money::zero) += expense.amount;
    }
    daily
}

/// Total spending per "YYYY-MM" month, in ascending order
pub fn spending_by_month(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut monthly = BTreeMap::new();
    for expense in expenses {
        let month = expense.date.format("%Y-%m").to_string();
        *monthly.entry(month).or_insert_with(Money::zero) += expense.amount;
    }
    monthly
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn expense(cents: i64, category: &str, date: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            date.parse::<NaiveDate>().unwrap(),
        )
        .unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1250, "food", "2024-01-05"),
            expense(700, "food", "2024-02-01"),
        ]
    }

    #[test]
    fn test_total() {
        assert_eq!(total(&sample()).cents(), 1950);
        assert_eq!(total(&[]).cents(), 0);
    }

    #[test]
    fn test_total_by_category() {
        let expenses = sample();
        // Query is normalized, so any casing matches
        assert_eq!(total_by_category(&expenses, "Food"), (Money::from_cents(1950), 2));
        assert_eq!(total_by_category(&expenses, "food"), (Money::from_cents(1950), 2));
        assert_eq!(total_by_category(&expenses, "Rent"), (Money::zero(), 0));
    }

    #[test]
    fn test_categories() {
        let mut expenses = sample();
        expenses.push(expense(300, "transport", "2024-02-03"));

        let cats = categories(&expenses);
        assert_eq!(
            cats.into_iter().collect::<Vec<_>>(),
            vec!["Food".to_string(), "Transport".to_string()]
        );
    }

    #[test]
    fn test_spending_by_day() {
        let mut expenses = sample();
        expenses.push(expense(500, "Transport", "2024-01-05"));

        let daily = spending_by_day(&expenses);
        assert_eq!(daily.len(), 2);

        let jan5: NaiveDate = "2024-01-05".parse().unwrap();
        assert_eq!(daily[&jan5].cents(), 1750);

        // Ascending chronological iteration
        let dates: Vec<_> = daily.keys().copied().collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_spending_by_month() {
        let monthly = spending_by_month(&sample());
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly["2024-01"].cents(), 1250);
        assert_eq!(monthly["2024-02"].cents(), 700);

        let months: Vec<_> = monthly.keys().cloned().collect();
        assert_eq!(months, vec!["2024-01".to_string(), "2024-02".to_string()]);
    }

    #[test]
    fn test_empty_groupings() {
        assert!(spending_by_day(&[]).is_empty());
        assert!(spending_by_month(&[]).is_empty());
        assert!(categories(&[]).is_empty());
    }
}
