//! Ledger service
//!
//! Owns the in-memory `LedgerState` and its backing file. Every mutating
//! operation leaves the balance in step with the transaction log and writes
//! the complete state back to disk before returning.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use log::info;

use crate::config::paths::{LedgerPaths, REPORT_FILE};
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_transactions_csv, ExportOutcome};
use crate::models::{Counterparty, LedgerState, Money, Side, Transaction, TransactionKind};
use crate::storage::LedgerStore;

/// Income and expense totals over the whole transaction log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashflowSummary {
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub net_cashflow: Money,
}

/// Wallet plus receivables minus payables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetWorth {
    pub wallet: Money,
    /// Money lent out (assets)
    pub receivables: Money,
    /// Money borrowed (liabilities)
    pub payables: Money,
    pub net_worth: Money,
}

impl NetWorth {
    pub fn is_in_debt(&self) -> bool {
        self.net_worth.is_negative()
    }
}

/// Result of a successful repayment or return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Some of the amount is still outstanding
    Partial { remaining: Money },
    /// The counterparty was paid off and removed from the list
    Cleared,
}

/// The personal ledger: balance, transaction log, receivables and payables
#[derive(Debug)]
pub struct Ledger {
    store: LedgerStore,
    report_path: PathBuf,
    state: LedgerState,
}

impl Ledger {
    /// Open the ledger in a data directory, creating nothing until the first write
    pub fn open(paths: &LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Self::load(LedgerStore::new(paths.ledger_file()), paths.report_file())
    }

    /// Load the ledger from `store`; CSV exports go to `report_path`
    pub fn load(store: LedgerStore, report_path: PathBuf) -> LedgerResult<Self> {
        let state = store.load()?;
        Ok(Self {
            store,
            report_path,
            state,
        })
    }

    /// Load from a single ledger file, exporting next to it
    pub fn from_file(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        let report_path = path
            .parent()
            .map(|dir| dir.join(REPORT_FILE))
            .unwrap_or_else(|| PathBuf::from(REPORT_FILE));
        Self::load(LedgerStore::new(path), report_path)
    }

    /// Write the complete state to disk
    pub fn persist(&self) -> LedgerResult<()> {
        self.store.save(&self.state)
    }

    // Queries

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn balance(&self) -> Money {
        self.state.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    /// People who owe the owner money
    pub fn assets(&self) -> &[Counterparty] {
        &self.state.assets
    }

    /// People the owner owes money to
    pub fn liabilities(&self) -> &[Counterparty] {
        &self.state.liabilities
    }

    pub fn income_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.state.transactions.iter().filter(|t| t.is_income())
    }

    pub fn expense_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.state.transactions.iter().filter(|t| t.is_expense())
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Path the CSV report is written to
    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// Totals over every recorded transaction.
    ///
    /// Not limited to the current calendar month.
    pub fn monthly_stats(&self) -> CashflowSummary {
        let total_income = self.state.total_of(TransactionKind::Income);
        let total_expense = self.state.total_of(TransactionKind::Expense);
        CashflowSummary {
            total_income,
            total_expense,
            net_cashflow: total_income.saturating_sub(total_expense),
        }
    }

    pub fn net_worth(&self) -> NetWorth {
        let wallet = self.state.balance;
        let receivables = self.state.total(Side::Assets);
        let payables = self.state.total(Side::Liabilities);
        NetWorth {
            wallet,
            receivables,
            payables,
            net_worth: wallet.saturating_add(receivables).saturating_sub(payables),
        }
    }

    // Mutations

    /// Record income or expense and persist
    pub fn record_transaction(
        &mut self,
        amount: Money,
        category: &str,
        kind: TransactionKind,
    ) -> LedgerResult<()> {
        self.ensure_fits(kind, amount, None)?;
        self.state.apply(Transaction::new(kind, amount, category));
        self.persist()
    }

    /// Lend money: an expense, plus a receivable dated today
    pub fn lend(&mut self, name: &str, amount: Money) -> LedgerResult<()> {
        self.ensure_fits(TransactionKind::Expense, amount, Some((Side::Assets, name)))?;
        let today = Local::now().date_naive();
        let name = self.known_name(Side::Assets, name);
        self.state.apply(Transaction::new(
            TransactionKind::Expense,
            amount,
            format!("Lent to {}", name),
        ));
        self.accrue(Side::Assets, &name, amount, Some(today));
        self.persist()
    }

    /// Receive money back from someone in the lending list
    pub fn receive_repayment(&mut self, name: &str, amount: Money) -> LedgerResult<Settlement> {
        self.settle(Side::Assets, name, amount, TransactionKind::Income, |who| {
            format!("Repayment from {}", who)
        })
    }

    /// Borrow money: an income, plus a payable
    pub fn borrow(&mut self, name: &str, amount: Money) -> LedgerResult<()> {
        self.ensure_fits(TransactionKind::Income, amount, Some((Side::Liabilities, name)))?;
        let name = self.known_name(Side::Liabilities, name);
        self.state.apply(Transaction::new(
            TransactionKind::Income,
            amount,
            format!("Borrowed from {}", name),
        ));
        self.accrue(Side::Liabilities, &name, amount, None);
        self.persist()
    }

    /// Pay back someone in the borrowing list
    pub fn return_money(&mut self, name: &str, amount: Money) -> LedgerResult<Settlement> {
        self.settle(Side::Liabilities, name, amount, TransactionKind::Expense, |who| {
            format!("Returned to {}", who)
        })
    }

    /// Discard everything and persist the empty ledger
    pub fn reset_all(&mut self) -> LedgerResult<()> {
        self.state = LedgerState::default();
        self.persist()?;
        info!("ledger at {} reset", self.store.path().display());
        Ok(())
    }

    /// Export the transaction log to the report file
    pub fn export_csv(&self) -> LedgerResult<ExportOutcome> {
        export_transactions_csv(&self.state.transactions, &self.report_path)
    }

    /// Refuse an amount that would overflow the balance or a counterparty's total
    fn ensure_fits(
        &self,
        kind: TransactionKind,
        amount: Money,
        owed: Option<(Side, &str)>,
    ) -> LedgerResult<()> {
        let too_large = || LedgerError::InvalidAmount(format!("{} is too large", amount));

        self.state
            .balance
            .checked_add(kind.signed(amount))
            .ok_or_else(too_large)?;

        if let Some((side, name)) = owed {
            if let Some(idx) = self.state.position(side, name) {
                self.state.side(side)[idx]
                    .amount
                    .checked_add(amount)
                    .ok_or_else(too_large)?;
            }
        }
        Ok(())
    }

    /// The stored spelling of `name` on a side, or `name` itself if absent
    fn known_name(&self, side: Side, name: &str) -> String {
        self.state
            .position(side, name)
            .map(|idx| self.state.side(side)[idx].name.clone())
            .unwrap_or_else(|| name.to_string())
    }

    /// Find-or-create a counterparty and add `amount` to what is outstanding
    fn accrue(&mut self, side: Side, name: &str, amount: Money, date: Option<NaiveDate>) {
        match self.state.position(side, name) {
            Some(idx) => {
                let person = &mut self.state.side_mut(side)[idx];
                person.amount += amount;
                if date.is_some() {
                    person.date = date;
                }
            }
            None => self.state.side_mut(side).push(Counterparty {
                name: name.to_string(),
                amount,
                date,
            }),
        }
    }

    /// Reduce what a counterparty owes (or is owed), removing them at zero
    fn settle(
        &mut self,
        side: Side,
        name: &str,
        amount: Money,
        kind: TransactionKind,
        category: impl FnOnce(&str) -> String,
    ) -> LedgerResult<Settlement> {
        let idx = self
            .state
            .position(side, name)
            .ok_or_else(|| LedgerError::not_in_list(side, name))?;

        let person = &self.state.side(side)[idx];
        if amount > person.amount {
            return Err(LedgerError::Overpayment {
                name: person.name.clone(),
                requested: amount,
                owed: person.amount,
            });
        }
        self.ensure_fits(kind, amount, None)?;

        let label = category(&person.name);
        self.state.apply(Transaction::new(kind, amount, label));

        let list = self.state.side_mut(side);
        list[idx].amount -= amount;
        let outcome = if list[idx].is_settled() {
            list.remove(idx);
            Settlement::Cleared
        } else {
            Settlement::Partial {
                remaining: list[idx].amount,
            }
        };

        self.persist()?;
        Ok(outcome)
    }
}
