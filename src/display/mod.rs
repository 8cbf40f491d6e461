//! Display formatting for terminal output

pub mod expense;
pub mod report;

pub use expense::format_expense_list;
pub use report::{
    format_categories, format_category_total, format_daily_summary, format_monthly_summary,
    format_total,
};
