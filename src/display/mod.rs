//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.

pub mod counterparty;

pub use counterparty::{format_borrowing_list, format_lending_list};

use crate::export::ExportOutcome;
use crate::models::Side;
use crate::services::{Ledger, Settlement};

/// Wallet balance and net cashflow, shown above the main menu
pub fn format_dashboard(ledger: &Ledger, symbol: &str) -> String {
    let stats = ledger.monthly_stats();
    format!(
        "Wallet Balance:  {}\nNet Cashflow:    {}\n",
        ledger.balance().format_with_symbol(symbol),
        stats.net_cashflow.format_with_symbol(symbol)
    )
}

/// User-facing message for a finished repayment (assets) or return (liabilities)
pub fn format_settlement(side: Side, name: &str, settlement: Settlement, symbol: &str) -> String {
    match (side, settlement) {
        (Side::Assets, Settlement::Cleared) => format!("{} has fully paid you back!", name),
        (Side::Assets, Settlement::Partial { remaining }) => format!(
            "Balance updated. {} still owes you {}.",
            name,
            remaining.format_with_symbol(symbol)
        ),
        (Side::Liabilities, Settlement::Cleared) => format!("You have paid off {}.", name),
        (Side::Liabilities, Settlement::Partial { remaining }) => format!(
            "Payment recorded. You still owe {} {}.",
            name,
            remaining.format_with_symbol(symbol)
        ),
    }
}

/// User-facing message for an export attempt
pub fn format_export(outcome: &ExportOutcome) -> String {
    match outcome {
        ExportOutcome::NothingToExport => "No data to export.".to_string(),
        ExportOutcome::Written { path, rows } => {
            format!("Exported {} transactions to '{}'", rows, path.display())
        }
    }
}
