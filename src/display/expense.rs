//! Expense display formatting
//!
//! Renders the expense register as a table with 1-based positions, the
//! addressing scheme the edit and delete menus use.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(position: usize, expense: &Expense) -> Self {
        Self {
            position,
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.clone(),
            amount: expense.amount.to_string(),
        }
    }
}

/// Format a list of expenses as a numbered register table
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses to display.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .enumerate()
        .map(|(i, e)| ExpenseRow::new(i + 1, e))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
