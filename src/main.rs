use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::audit::AuditLogger;
use spendlog::config::{DataPaths, Settings};
use spendlog::display::{
    format_categories, format_category_total, format_daily_summary, format_expense_list,
    format_monthly_summary, format_total,
};
use spendlog::reports;
use spendlog::shell::Shell;
use spendlog::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Local, single-user expense tracker for the terminal",
    long_about = "spendlog records expenses (amount, category, date) to a local \
                  JSON file and offers aggregate views by category, total, and \
                  daily/monthly time series. Run without a subcommand to start \
                  the interactive menu."
)]
struct Cli {
    /// Path to the expense file (defaults to the platform data directory)
    #[arg(long, value_name = "PATH", env = "SPENDLOG_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary report without entering the menu
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

#[derive(Subcommand)]
enum ReportCommands {
    /// Total spending and transaction count
    Total,
    /// Total spending for one category
    Category {
        /// Category label (matched after title-case normalization)
        name: String,
    },
    /// Spending per day
    Daily,
    /// Spending per month
    Monthly,
    /// List all expenses
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DataPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let expenses_file = cli.file.unwrap_or_else(|| paths.expenses_file());
    let store = ExpenseStore::new(expenses_file);

    // A corrupt expense file is fatal: report it rather than silently
    // replacing the user's data with an empty ledger.
    let ledger = store.load()?;

    match cli.command {
        Some(Commands::Report(cmd)) => {
            let expenses = ledger.expenses();
            match cmd {
                ReportCommands::Total => {
                    print!("{}", format_total(reports::total(expenses), expenses.len()));
                }
                ReportCommands::Category { name } => {
                    let (total, count) = reports::total_by_category(expenses, &name);
                    print!("{}", format_category_total(&name, total, count));
                    print!("{}", format_categories(&reports::categories(expenses)));
                }
                ReportCommands::Daily => {
                    print!("{}", format_daily_summary(&reports::spending_by_day(expenses)));
                }
                ReportCommands::Monthly => {
                    print!(
                        "{}",
                        format_monthly_summary(&reports::spending_by_month(expenses))
                    );
                }
                ReportCommands::List => {
                    print!("{}", format_expense_list(expenses));
                }
            }
        }
        Some(Commands::Config) => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expense file:   {}", store.path().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            let audit = AuditLogger::new(paths.audit_log());
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(stdin.lock(), stdout.lock(), ledger, &store, &audit).run()?;
        }
    }

    Ok(())
}
