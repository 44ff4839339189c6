//! Interactive numbered menu
//!
//! The menu loop is a thin caller of the `Ledger` API. Bad numbers and
//! business-rule errors are reported and the session continues; storage
//! failures end the session.

mod prompt;

pub use prompt::Prompter;

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{
    format_borrowing_list, format_dashboard, format_export, format_lending_list,
    format_settlement,
};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Side, TransactionKind};
use crate::reports::{CashflowReport, NetWorthReport};
use crate::services::Ledger;

/// Whether the session keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive session
pub struct Menu<'a, R, W> {
    ledger: &'a mut Ledger,
    settings: &'a Settings,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            ledger,
            settings,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            self.show_main_menu()?;
            let Some(choice) = self.prompter.ask("\nSelect Option (1-9): ")? else {
                return Ok(());
            };

            let result = match choice.as_str() {
                "1" => self.add_transaction(TransactionKind::Income),
                "2" => self.add_transaction(TransactionKind::Expense),
                "3" => self.show_history(),
                "4" => self.lending_menu(),
                "5" => self.borrowing_menu(),
                "6" => self.export(),
                "7" => self.reset(),
                "8" => Ok(Flow::Exit),
                "9" => self.show_net_worth(),
                _ => {
                    self.prompter.say("Invalid option.")?;
                    Ok(Flow::Continue)
                }
            };

            if self.settle_result(result)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Report recoverable errors and keep going; pass fatal ones up
    fn settle_result(&mut self, result: LedgerResult<Flow>) -> LedgerResult<Flow> {
        match result {
            Ok(flow) => Ok(flow),
            Err(LedgerError::InvalidAmount(detail)) => {
                log::debug!("rejected amount: {}", detail);
                self.prompter.say("Invalid number.")?;
                Ok(Flow::Continue)
            }
            Err(e) if e.is_recoverable() => {
                self.prompter.say(format!("Error: {}", e))?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    fn show_main_menu(&mut self) -> LedgerResult<()> {
        let dashboard = format_dashboard(self.ledger, self.symbol());
        let p = &mut self.prompter;
        p.say("")?;
        p.say("=".repeat(35))?;
        p.say(" EXPENSE MANAGER")?;
        p.say("=".repeat(35))?;
        p.print(dashboard)?;
        p.say("-".repeat(35))?;
        p.say("1. Add Income")?;
        p.say("2. Add Expense")?;
        p.say("3. View History (Income vs Expense)")?;
        p.say("4. Lending (People owe me)")?;
        p.say("5. Borrowing (I owe people)")?;
        p.say("6. Export to CSV")?;
        p.say("7. Reset Data")?;
        p.say("8. Exit")?;
        p.say("9. View Net Worth")
    }

    fn add_transaction(&mut self, kind: TransactionKind) -> LedgerResult<Flow> {
        let label = match kind {
            TransactionKind::Income => "Source: ",
            TransactionKind::Expense => "Category: ",
        };
        let amount_prompt = format!("Amount ({}): ", self.symbol());

        let Some(amount) = self.prompter.ask_amount(&amount_prompt)? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.prompter.ask(label)? else {
            return Ok(Flow::Exit);
        };

        self.ledger.record_transaction(amount, &category, kind)?;
        let message = format!(
            "Recorded {}: {} ({})",
            kind.as_str(),
            amount.format_with_symbol(self.symbol()),
            category
        );
        self.prompter.say(message)?;
        Ok(Flow::Continue)
    }

    fn show_history(&mut self) -> LedgerResult<Flow> {
        let report = CashflowReport::generate(self.ledger).format_terminal(self.symbol());
        self.prompter.print(report)?;
        Ok(Flow::Continue)
    }

    fn show_net_worth(&mut self) -> LedgerResult<Flow> {
        let report = NetWorthReport::generate(self.ledger).format_terminal(self.symbol());
        self.prompter.print(report)?;
        Ok(Flow::Continue)
    }

    fn lending_menu(&mut self) -> LedgerResult<Flow> {
        let list = format_lending_list(
            self.ledger.assets(),
            self.symbol(),
            &self.settings.date_format,
        );
        self.prompter.say("\n--- PEOPLE WHO OWE ME ---")?;
        self.prompter.print(list)?;
        self.prompter.say("-".repeat(20))?;
        self.prompter.say("1. Lend Money")?;
        self.prompter.say("2. Mark as Paid")?;
        self.prompter.say("3. Back")?;

        match self.prompter.ask("Select: ")?.as_deref() {
            None => Ok(Flow::Exit),
            Some("1") => self.counterparty_action(Side::Assets, false),
            Some("2") => self.counterparty_action(Side::Assets, true),
            Some(_) => Ok(Flow::Continue),
        }
    }

    fn borrowing_menu(&mut self) -> LedgerResult<Flow> {
        let list = format_borrowing_list(self.ledger.liabilities(), self.symbol());
        self.prompter.say("\n--- PEOPLE I OWE ---")?;
        self.prompter.print(list)?;
        self.prompter.say("-".repeat(20))?;
        self.prompter.say("1. Borrow Money")?;
        self.prompter.say("2. Return Money")?;
        self.prompter.say("3. Back")?;

        match self.prompter.ask("Select: ")?.as_deref() {
            None => Ok(Flow::Exit),
            Some("1") => self.counterparty_action(Side::Liabilities, false),
            Some("2") => self.counterparty_action(Side::Liabilities, true),
            Some(_) => Ok(Flow::Continue),
        }
    }

    /// Ask for name and amount, then open (lend/borrow) or settle (repay/return)
    fn counterparty_action(&mut self, side: Side, settle: bool) -> LedgerResult<Flow> {
        let Some(name) = self.prompter.ask("Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(amount) = self.prompter.ask_amount("Amount: ")? else {
            return Ok(Flow::Exit);
        };
        let shown = amount.format_with_symbol(self.symbol());

        let message = match (side, settle) {
            (Side::Assets, false) => {
                self.ledger.lend(&name, amount)?;
                format!("Lent {} to {}.", shown, name)
            }
            (Side::Liabilities, false) => {
                self.ledger.borrow(&name, amount)?;
                format!("You now owe {} {}.", name, shown)
            }
            (Side::Assets, true) => {
                let settlement = self.ledger.receive_repayment(&name, amount)?;
                format_settlement(side, &name, settlement, self.symbol())
            }
            (Side::Liabilities, true) => {
                let settlement = self.ledger.return_money(&name, amount)?;
                format_settlement(side, &name, settlement, self.symbol())
            }
        };

        self.prompter.say(message)?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> LedgerResult<Flow> {
        let outcome = self.ledger.export_csv()?;
        self.prompter.say(format_export(&outcome))?;
        Ok(Flow::Continue)
    }

    fn reset(&mut self) -> LedgerResult<Flow> {
        if self.prompter.confirm("Confirm reset? (y/n): ")? {
            self.ledger.reset_all()?;
            self.prompter.say("All data has been reset to 0.")?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerPaths;
    use crate::models::Money;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_bytes(ledger: &mut Ledger, input: Vec<u8>) -> String {
        let settings = Settings::default();
        let mut menu = Menu::new(ledger, &settings, Cursor::new(input), Vec::new());
        menu.run().unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    fn run_script(ledger: &mut Ledger, script: &str) -> String {
        run_bytes(ledger, script.as_bytes().to_vec())
    }

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, Ledger::open(&paths).unwrap())
    }

    #[test]
    fn test_income_and_expense() {
        let (_temp, mut ledger) = create_test_ledger();

        let out = run_script(&mut ledger, "1\n5000\nSalary\n2\n1200\nGroceries\n8\n");

        assert!(out.contains("Recorded income: ₹5,000.00 (Salary)"));
        assert!(out.contains("Recorded expense: ₹1,200.00 (Groceries)"));
        assert!(out.contains("Wallet Balance:  ₹3,800.00"));
        assert_eq!(ledger.balance(), Money::from_units(3800));
    }

    #[test]
    fn test_invalid_number_keeps_session_alive() {
        let (_temp, mut ledger) = create_test_ledger();

        let out = run_script(&mut ledger, "1\nlots\n1\n10\nGift\n8\n");

        assert!(out.contains("Invalid number."));
        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.balance(), Money::from_units(10));
    }

    #[test]
    fn test_lending_round_trip() {
        let (_temp, mut ledger) = create_test_ledger();

        let out = run_script(&mut ledger, "4\n1\nAmit\n500\n4\n2\namit\n500\n8\n");

        assert!(out.contains("Lent ₹500.00 to Amit."));
        assert!(out.contains("Amit: ₹500.00"));
        assert!(out.contains("amit has fully paid you back!"));
        assert!(ledger.assets().is_empty());
        assert_eq!(ledger.balance(), Money::zero());
    }

    #[test]
    fn test_business_errors_are_reported() {
        let (_temp, mut ledger) = create_test_ledger();

        let out = run_script(
            &mut ledger,
            "5\n1\nPriya\n300\n5\n2\nPriya\n400\n4\n2\nNobody\n1\n8\n",
        );

        assert!(out.contains("You now owe Priya ₹300.00."));
        assert!(out.contains("Error: Amount ₹400.00 exceeds the ₹300.00 outstanding with Priya"));
        assert!(out.contains("Error: Nobody is not in your lending list"));
        assert_eq!(ledger.liabilities()[0].amount, Money::from_units(300));
    }

    #[test]
    fn test_reset_needs_confirmation() {
        let (_temp, mut ledger) = create_test_ledger();
        ledger
            .record_transaction(Money::from_units(1), "x", TransactionKind::Income)
            .unwrap();

        run_script(&mut ledger, "7\nn\n");
        assert_eq!(ledger.transactions().len(), 1);

        let out = run_script(&mut ledger, "7\ny\n8\n");
        assert!(out.contains("All data has been reset to 0."));
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn test_export_and_net_worth() {
        let (_temp, mut ledger) = create_test_ledger();

        let out = run_script(&mut ledger, "6\n5\n1\nBank\n100\n9\n6\n8\n");

        assert!(out.contains("No data to export."));
        assert!(out.contains("NET WORTH"));
        assert!(out.contains("Exported 1 transactions to"));
        assert!(ledger.report_path().exists());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp, mut ledger) = create_test_ledger();

        let out = run_script(&mut ledger, "3\n");
        assert!(out.contains("INCOME & EXPENSE HISTORY"));
    }

    #[test]
    fn test_unknown_option() {
        let (_temp, mut ledger) = create_test_ledger();

        let out = run_script(&mut ledger, "42\n8\n");
        assert!(out.contains("Invalid option."));
    }

    #[test]
    fn test_garbled_input_keeps_session_alive() {
        let (_temp, mut ledger) = create_test_ledger();

        let mut input = b"1\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"1\n10\nGift\n8\n");

        let out = run_bytes(&mut ledger, input);

        assert!(out.contains("Invalid number."));
        assert!(out.contains("Recorded income: ₹10.00 (Gift)"));
        assert_eq!(ledger.transactions().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_locked_report_keeps_session_alive() {
        use std::fs::{self, OpenOptions};
        use std::os::unix::fs::PermissionsExt;

        let (_temp, mut ledger) = create_test_ledger();
        ledger
            .record_transaction(Money::from_units(100), "Gift", TransactionKind::Income)
            .unwrap();
        let report = ledger.report_path().to_path_buf();
        fs::write(&report, "open elsewhere").unwrap();
        fs::set_permissions(&report, fs::Permissions::from_mode(0o444)).unwrap();

        // Permission bits do not bind root
        if OpenOptions::new().write(true).open(&report).is_ok() {
            return;
        }

        let out = run_script(&mut ledger, "6\n1\n5\nTip\n8\n");

        assert!(out.contains("Error: Cannot write"));
        assert!(out.contains("Recorded income: ₹5.00 (Tip)"));
        assert_eq!(ledger.transactions().len(), 2);
    }
}
