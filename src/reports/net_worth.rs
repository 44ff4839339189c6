//! Net Worth Report
//!
//! Wallet balance plus money lent out, minus money borrowed.

use crate::models::Money;
use crate::services::{Ledger, NetWorth};

/// Net Worth Report
#[derive(Debug, Clone)]
pub struct NetWorthReport {
    pub summary: NetWorth,
    /// Number of people who owe the owner money
    pub borrower_count: usize,
    /// Number of people the owner owes money to
    pub lender_count: usize,
}

impl NetWorthReport {
    /// Generate a net worth report
    pub fn generate(ledger: &Ledger) -> Self {
        Self {
            summary: ledger.net_worth(),
            borrower_count: ledger.assets().len(),
            lender_count: ledger.liabilities().len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str(&"=".repeat(44));
        output.push('\n');
        output.push_str(" NET WORTH\n");
        output.push_str(&"=".repeat(44));
        output.push('\n');

        output.push_str(&format!(
            "Wallet Balance:          {:>18}\n",
            fmt(self.summary.wallet)
        ));
        output.push_str(&format!(
            "Money Lent (Assets):     {:>18}\n",
            fmt(self.summary.receivables)
        ));
        output.push_str(&format!(
            "Money Borrowed (Debt):   {:>18}\n",
            fmt(self.summary.payables)
        ));
        output.push_str(&"-".repeat(44));
        output.push('\n');

        if self.summary.is_in_debt() {
            output.push_str(&format!(
                "Actual Value:            {:>18} (In Debt)\n",
                fmt(self.summary.net_worth)
            ));
        } else {
            output.push_str(&format!(
                "Actual Value:            {:>18}\n",
                fmt(self.summary.net_worth)
            ));
        }

        output.push_str(&format!(
            "({} owe you, you owe {})\n",
            self.borrower_count, self.lender_count
        ));
        output.push_str(&"=".repeat(44));
        output.push('\n');

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerPaths;
    use crate::models::TransactionKind;
    use tempfile::TempDir;

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, Ledger::open(&paths).unwrap())
    }

    #[test]
    fn test_generate_net_worth_report() {
        let (_temp, mut ledger) = create_test_ledger();
        ledger
            .record_transaction(Money::from_units(2000), "Salary", TransactionKind::Income)
            .unwrap();
        ledger.lend("Amit", Money::from_units(500)).unwrap();
        ledger.borrow("Priya", Money::from_units(300)).unwrap();

        let report = NetWorthReport::generate(&ledger);
        assert_eq!(report.summary.wallet, Money::from_units(1800));
        assert_eq!(report.summary.net_worth, Money::from_units(2000));
        assert_eq!(report.borrower_count, 1);
        assert_eq!(report.lender_count, 1);

        let text = report.format_terminal("₹");
        assert!(text.contains("₹1,800.00"));
        assert!(text.contains("₹2,000.00"));
        assert!(!text.contains("In Debt"));
    }

    #[test]
    fn test_negative_net_worth_is_flagged() {
        let (_temp, mut ledger) = create_test_ledger();
        ledger
            .record_transaction(Money::from_units(1234), "Phone", TransactionKind::Expense)
            .unwrap();

        let text = NetWorthReport::generate(&ledger).format_terminal("₹");
        assert!(text.contains("-₹1,234.00 (In Debt)"));
    }
}
