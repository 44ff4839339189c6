//! CLI commands for reports
//!
//! History, cashflow totals and net worth.

use crate::error::LedgerResult;
use crate::reports::{CashflowReport, NetWorthReport};
use crate::services::Ledger;

/// Print income and expense history with totals
pub fn handle_history_command(ledger: &Ledger, symbol: &str) -> LedgerResult<()> {
    let report = CashflowReport::generate(ledger);
    print!("{}", report.format_terminal(symbol));
    Ok(())
}

/// Print all-time totals
pub fn handle_stats_command(ledger: &Ledger, symbol: &str) -> LedgerResult<()> {
    let stats = ledger.monthly_stats();

    println!("{:<16} {:>14}", "Total income:", stats.total_income.format_with_symbol(symbol));
    println!("{:<16} {:>14}", "Total expense:", stats.total_expense.format_with_symbol(symbol));
    println!("{}", "-".repeat(31));
    println!("{:<16} {:>14}", "Net cashflow:", stats.net_cashflow.format_with_symbol(symbol));
    Ok(())
}

/// Print the net worth report
pub fn handle_net_worth_command(ledger: &Ledger, symbol: &str) -> LedgerResult<()> {
    let report = NetWorthReport::generate(ledger);
    print!("{}", report.format_terminal(symbol));
    Ok(())
}
