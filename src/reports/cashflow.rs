//! Cashflow History Report
//!
//! Income and expense transactions listed side by side with their totals.

use crate::models::{Money, Transaction, TransactionKind};
use crate::services::{CashflowSummary, Ledger};

/// One line of the history
#[derive(Debug, Clone)]
pub struct CashflowEntry {
    pub date: String,
    pub category: String,
    pub amount: Money,
}

impl From<&Transaction> for CashflowEntry {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date_string(),
            category: txn.category.clone(),
            amount: txn.amount,
        }
    }
}

/// Income vs expense history
#[derive(Debug, Clone)]
pub struct CashflowReport {
    pub income: Vec<CashflowEntry>,
    pub expenses: Vec<CashflowEntry>,
    pub summary: CashflowSummary,
}

impl CashflowReport {
    /// Generate the report from the whole transaction log
    pub fn generate(ledger: &Ledger) -> Self {
        Self {
            income: ledger.income_transactions().map(CashflowEntry::from).collect(),
            expenses: ledger.expense_transactions().map(CashflowEntry::from).collect(),
            summary: ledger.monthly_stats(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(" INCOME & EXPENSE HISTORY\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        self.format_section(
            &mut output,
            TransactionKind::Income,
            "Source",
            &self.income,
            self.summary.total_income,
            symbol,
        );
        output.push('\n');
        self.format_section(
            &mut output,
            TransactionKind::Expense,
            "Category",
            &self.expenses,
            self.summary.total_expense,
            symbol,
        );

        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "NET CASHFLOW: {}\n",
            self.summary.net_cashflow.format_with_symbol(symbol)
        ));

        output
    }

    fn format_section(
        &self,
        output: &mut String,
        kind: TransactionKind,
        label: &str,
        entries: &[CashflowEntry],
        total: Money,
        symbol: &str,
    ) {
        output.push_str(&format!("\n{}\n", kind.to_string().to_uppercase()));
        output.push_str(&format!("{:<20} | {:<15} | {}\n", "Date", label, "Amount"));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        if entries.is_empty() {
            output.push_str("  (none)\n");
        }
        for entry in entries {
            output.push_str(&format!(
                "{:<20} | {:<15} | {}\n",
                entry.date,
                entry.category,
                entry.amount.format_with_symbol(symbol)
            ));
        }

        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "TOTAL {}: {}\n",
            kind.to_string().to_uppercase(),
            total.format_with_symbol(symbol)
        ));
    }
}
