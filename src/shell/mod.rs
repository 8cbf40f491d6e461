//! Interactive menu shell
//!
//! A thin wrapper over the ledger, storage, reports and audit layers. The
//! shell owns the in-memory ledger, routes validated input into ledger
//! operations, and persists the full ledger after every mutation. It is
//! the only component that reads from or writes to the console.

pub mod prompt;

use std::io::{BufRead, Write};

use crate::audit::{AuditEntry, AuditLogger};
use crate::display::{
    format_categories, format_category_total, format_daily_summary, format_expense_list,
    format_monthly_summary, format_total,
};
use crate::error::ExpenseResult;
use crate::models::{Expense, ExpensePatch, Ledger, Money};
use crate::reports;
use crate::storage::ExpenseStore;

use prompt::{prompt_amount, prompt_date, prompt_line, prompt_position};

/// The interactive shell, generic over its input and output streams
pub struct Shell<'a, R: BufRead, W: Write> {
    input: R,
    output: W,
    ledger: Ledger,
    store: &'a ExpenseStore,
    audit: &'a AuditLogger,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell owning the given ledger
    pub fn new(
        input: R,
        output: W,
        ledger: Ledger,
        store: &'a ExpenseStore,
        audit: &'a AuditLogger,
    ) -> Self {
        Self {
            input,
            output,
            ledger,
            store,
            audit,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(mut self) -> ExpenseResult<()> {
        writeln!(self.output, "Welcome to spendlog!")?;
        writeln!(self.output, "--------------------")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Main Menu")?;
            writeln!(self.output, "---------")?;
            writeln!(self.output, "1. Add Expense")?;
            writeln!(self.output, "2. View Summary")?;
            writeln!(self.output, "3. Edit Expense")?;
            writeln!(self.output, "4. Delete Expense")?;
            writeln!(self.output, "5. Exit")?;
            writeln!(self.output)?;

            let choice = match prompt_line(&mut self.input, &mut self.output, "Enter your choice (1-5): ")? {
                Some(choice) => choice,
                None => return Ok(()),
            };

            match choice.as_str() {
                "1" => {
                    if self.add_expense()?.is_none() {
                        return Ok(());
                    }
                }
                "2" => {
                    if self.view_summary()?.is_none() {
                        return Ok(());
                    }
                }
                "3" => {
                    if self.edit_expense()?.is_none() {
                        return Ok(());
                    }
                }
                "4" => {
                    if self.delete_expense()?.is_none() {
                        return Ok(());
                    }
                }
                "5" => {
                    writeln!(self.output)?;
                    writeln!(self.output, "Thank you for using spendlog!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Prompt for and append a new expense; `None` means input ended
    fn add_expense(&mut self) -> ExpenseResult<Option<()>> {
        writeln!(self.output)?;
        writeln!(self.output, "Add New Expense")?;
        writeln!(self.output, "---------------")?;

        let amount = match prompt_amount(&mut self.input, &mut self.output, "Enter amount spent: $")? {
            Some(amount) => amount,
            None => return Ok(None),
        };

        let category = match prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter category (e.g., Food, Transport, Entertainment): ",
        )? {
            Some(category) => category,
            None => return Ok(None),
        };

        let date = match prompt_date(
            &mut self.input,
            &mut self.output,
            "Enter date (YYYY-MM-DD) or leave blank for today: ",
        )? {
            Some(date) => date,
            None => return Ok(None),
        };

        // Amount comes from prompt_amount, so this cannot fail validation
        let expense = Expense::new(amount, &category, date)?;

        self.ledger.append(expense.clone());
        self.store.save(&self.ledger)?;
        self.audit
            .log(&AuditEntry::added(self.ledger.len(), &expense))?;

        writeln!(self.output)?;
        writeln!(self.output, "Expense added successfully!")?;
        Ok(Some(()))
    }

    /// The View Summary submenu loop
    fn view_summary(&mut self) -> ExpenseResult<Option<()>> {
        if self.ledger.is_empty() {
            writeln!(self.output)?;
            writeln!(self.output, "No expenses to display.")?;
            return Ok(Some(()));
        }

        writeln!(self.output)?;
        writeln!(self.output, "Expense Summary")?;
        writeln!(self.output, "---------------")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1. View by category")?;
            writeln!(self.output, "2. View total spending")?;
            writeln!(self.output, "3. View spending over time")?;
            writeln!(self.output, "4. View all expenses")?;
            writeln!(self.output, "5. Back to main menu")?;
            writeln!(self.output)?;

            let choice = match prompt_line(&mut self.input, &mut self.output, "Enter your choice (1-5): ")? {
                Some(choice) => choice,
                None => return Ok(None),
            };

            let expenses = self.ledger.expenses();
            match choice.as_str() {
                "1" => {
                    let categories = reports::categories(expenses);
                    writeln!(self.output)?;
                    write!(self.output, "{}", format_categories(&categories))?;

                    let category = match prompt_line(
                        &mut self.input,
                        &mut self.output,
                        "Enter category to view total: ",
                    )? {
                        Some(category) => category,
                        None => return Ok(None),
                    };

                    let (total, count) = reports::total_by_category(self.ledger.expenses(), &category);
                    writeln!(self.output)?;
                    write!(self.output, "{}", format_category_total(&category, total, count))?;
                }
                "2" => {
                    let total = reports::total(expenses);
                    writeln!(self.output)?;
                    write!(self.output, "{}", format_total(total, expenses.len()))?;
                }
                "3" => {
                    if self.spending_over_time()?.is_none() {
                        return Ok(None);
                    }
                }
                "4" => {
                    writeln!(self.output)?;
                    writeln!(self.output, "All Expenses")?;
                    writeln!(self.output, "------------")?;
                    write!(self.output, "{}", format_expense_list(expenses))?;
                }
                "5" => return Ok(Some(())),
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// The spending-over-time submenu
    fn spending_over_time(&mut self) -> ExpenseResult<Option<()>> {
        writeln!(self.output)?;
        writeln!(self.output, "Spending Over Time")?;
        writeln!(self.output, "------------------")?;
        writeln!(self.output, "1. Daily summary")?;
        writeln!(self.output, "2. Monthly summary")?;
        writeln!(self.output, "3. Back")?;
        writeln!(self.output)?;

        let choice = match prompt_line(&mut self.input, &mut self.output, "Enter your choice (1-3): ")? {
            Some(choice) => choice,
            None => return Ok(None),
        };

        match choice.as_str() {
            "1" => {
                let daily = reports::spending_by_day(self.ledger.expenses());
                writeln!(self.output)?;
                write!(self.output, "{}", format_daily_summary(&daily))?;
            }
            "2" => {
                let monthly = reports::spending_by_month(self.ledger.expenses());
                writeln!(self.output)?;
                write!(self.output, "{}", format_monthly_summary(&monthly))?;
            }
            _ => {}
        }
        Ok(Some(()))
    }

    /// Edit one expense at a 1-based position; unanswered fields keep their value
    fn edit_expense(&mut self) -> ExpenseResult<Option<()>> {
        if self.ledger.is_empty() {
            writeln!(self.output)?;
            writeln!(self.output, "No expenses to edit.")?;
            return Ok(Some(()));
        }

        writeln!(self.output)?;
        writeln!(self.output, "Edit Expense")?;
        writeln!(self.output, "------------")?;
        write!(self.output, "{}", format_expense_list(self.ledger.expenses()))?;
        writeln!(self.output)?;

        let index = match prompt_position(
            &mut self.input,
            &mut self.output,
            "Enter the number of the expense to edit: ",
            self.ledger.len(),
        )? {
            Some(Some(index)) => index,
            Some(None) => {
                writeln!(self.output, "Invalid selection.")?;
                return Ok(Some(()));
            }
            None => return Ok(None),
        };

        // Position was just validated, so the record is present
        let current = self.ledger.get(index).cloned().ok_or_else(|| {
            crate::error::ExpenseError::invalid_index(index, self.ledger.len())
        })?;

        writeln!(self.output)?;
        writeln!(self.output, "Editing expense: {}", current)?;

        let mut patch = ExpensePatch::new();

        let amount_line = match prompt_line(
            &mut self.input,
            &mut self.output,
            &format!(
                "Enter new amount (current: {}) or press Enter to keep: ",
                current.amount
            ),
        )? {
            Some(line) => line,
            None => return Ok(None),
        };
        if !amount_line.is_empty() {
            match Money::parse(&amount_line) {
                Ok(amount) if amount.is_positive() => patch = patch.amount(amount),
                _ => writeln!(self.output, "Invalid amount. Keeping original value.")?,
            }
        }

        let category_line = match prompt_line(
            &mut self.input,
            &mut self.output,
            &format!(
                "Enter new category (current: {}) or press Enter to keep: ",
                current.category
            ),
        )? {
            Some(line) => line,
            None => return Ok(None),
        };
        if !category_line.is_empty() {
            patch = patch.category(category_line);
        }

        let date_line = match prompt_line(
            &mut self.input,
            &mut self.output,
            &format!(
                "Enter new date (YYYY-MM-DD) (current: {}) or press Enter to keep: ",
                current.date
            ),
        )? {
            Some(line) => line,
            None => return Ok(None),
        };
        if !date_line.is_empty() {
            match chrono::NaiveDate::parse_from_str(&date_line, "%Y-%m-%d") {
                Ok(date) => patch = patch.date(date),
                Err(_) => writeln!(self.output, "Invalid date format. Keeping original date.")?,
            }
        }

        if !patch.is_empty() {
            let updated = self.ledger.update_at(index, patch)?.clone();
            self.store.save(&self.ledger)?;
            self.audit
                .log(&AuditEntry::edited(index + 1, &current, &updated))?;
        }

        writeln!(self.output)?;
        writeln!(self.output, "Expense updated successfully!")?;
        Ok(Some(()))
    }

    /// Delete one expense at a 1-based position
    fn delete_expense(&mut self) -> ExpenseResult<Option<()>> {
        if self.ledger.is_empty() {
            writeln!(self.output)?;
            writeln!(self.output, "No expenses to delete.")?;
            return Ok(Some(()));
        }

        writeln!(self.output)?;
        writeln!(self.output, "Delete Expense")?;
        writeln!(self.output, "--------------")?;
        write!(self.output, "{}", format_expense_list(self.ledger.expenses()))?;
        writeln!(self.output)?;

        let index = match prompt_position(
            &mut self.input,
            &mut self.output,
            "Enter the number of the expense to delete: ",
            self.ledger.len(),
        )? {
            Some(Some(index)) => index,
            Some(None) => {
                writeln!(self.output, "Invalid selection.")?;
                return Ok(Some(()));
            }
            None => return Ok(None),
        };

        let removed = self.ledger.remove_at(index)?;
        self.store.save(&self.ledger)?;
        self.audit.log(&AuditEntry::deleted(index + 1, &removed))?;

        writeln!(self.output)?;
        writeln!(self.output, "Deleted expense: {}", removed)?;
        Ok(Some(()))
    }
}
