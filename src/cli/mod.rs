//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger service.

pub mod export;
pub mod people;
pub mod report;
pub mod transaction;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::Ledger;

pub use export::handle_export_command;
pub use people::{handle_people_command, PeopleCommand};
pub use report::{handle_history_command, handle_net_worth_command, handle_stats_command};
pub use transaction::{handle_transaction_command, TransactionArgs};

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Record income
    Income {
        /// Amount (e.g., "5000" or "1,250.50")
        amount: String,
        /// Where the money came from
        source: String,
    },

    /// Record an expense
    Expense {
        /// Amount (e.g., "1200")
        amount: String,
        /// What the money was spent on
        category: String,
    },

    /// Show income vs expense history
    History,

    /// Show total income, total expense and net cashflow
    Stats,

    /// Lend money to someone
    Lend {
        /// Borrower's name
        name: String,
        /// Amount lent
        amount: String,
    },

    /// Record a repayment from someone you lent to
    Repay {
        /// Borrower's name (case-insensitive)
        name: String,
        /// Amount received
        amount: String,
    },

    /// Borrow money from someone
    Borrow {
        /// Lender's name
        name: String,
        /// Amount borrowed
        amount: String,
    },

    /// Return money you borrowed
    Return {
        /// Lender's name (case-insensitive)
        name: String,
        /// Amount returned
        amount: String,
    },

    /// List who owes you and whom you owe
    People,

    /// Export transactions to expense_report.csv
    Export,

    /// Reset all data
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the net worth report
    #[command(alias = "networth")]
    NetWorth,

    /// Show resolved paths and settings, optionally changing them
    Config {
        /// Currency symbol shown in reports (e.g., "$")
        #[arg(long)]
        currency: Option<String>,
        /// strftime format for lending dates (e.g., "%d/%m/%Y")
        #[arg(long)]
        date_format: Option<String>,
    },
}

/// Parse a non-negative amount given on the command line
pub fn parse_amount(text: &str) -> LedgerResult<Money> {
    let amount = Money::parse(text)?;
    if amount.is_negative() {
        return Err(LedgerError::InvalidAmount(format!("'{}' is negative", text)));
    }
    Ok(amount)
}

/// Dispatch a ledger command
///
/// `Menu`, `Reset` and `Config` need the terminal or the paths and are
/// handled by the binary.
pub fn handle_ledger_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: Commands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        Commands::Income { amount, source } => {
            handle_transaction_command(ledger, symbol, TransactionArgs::income(amount, source))
        }
        Commands::Expense { amount, category } => {
            handle_transaction_command(ledger, symbol, TransactionArgs::expense(amount, category))
        }
        Commands::History => handle_history_command(ledger, symbol),
        Commands::Stats => handle_stats_command(ledger, symbol),
        Commands::Lend { name, amount } => {
            handle_people_command(ledger, settings, PeopleCommand::Lend { name, amount })
        }
        Commands::Repay { name, amount } => {
            handle_people_command(ledger, settings, PeopleCommand::Repay { name, amount })
        }
        Commands::Borrow { name, amount } => {
            handle_people_command(ledger, settings, PeopleCommand::Borrow { name, amount })
        }
        Commands::Return { name, amount } => {
            handle_people_command(ledger, settings, PeopleCommand::Return { name, amount })
        }
        Commands::People => handle_people_command(ledger, settings, PeopleCommand::List),
        Commands::Export => handle_export_command(ledger),
        Commands::NetWorth => handle_net_worth_command(ledger, symbol),
        Commands::Menu | Commands::Reset { .. } | Commands::Config { .. } => Err(LedgerError::Config(
            "command must be handled by the binary".into(),
        )),
    }
}
