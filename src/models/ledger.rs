//! The persisted ledger record
//!
//! `LedgerState` is the whole contents of the ledger file: wallet balance,
//! the transaction log and both counterparty lists.

use serde::{Deserialize, Serialize};

use super::counterparty::Counterparty;
use super::money::Money;
use super::transaction::{Transaction, TransactionKind};

/// Which counterparty list an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// People who owe the owner money
    Assets,
    /// People the owner owes money to
    Liabilities,
}

impl Side {
    /// Human label for the list
    pub fn label(&self) -> &'static str {
        match self {
            Self::Assets => "lending list",
            Self::Liabilities => "borrowing list",
        }
    }
}

/// Everything stored in the ledger file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Wallet balance; may be negative
    #[serde(default)]
    pub balance: Money,

    /// Every balance-affecting event, oldest first
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Receivables
    #[serde(default)]
    pub assets: Vec<Counterparty>,

    /// Payables
    #[serde(default)]
    pub liabilities: Vec<Counterparty>,
}

impl LedgerState {
    /// Apply a transaction to the balance and append it to the log
    pub fn apply(&mut self, txn: Transaction) {
        self.balance += txn.signed_amount();
        self.transactions.push(txn);
    }

    /// The counterparty list for a side
    pub fn side(&self, side: Side) -> &[Counterparty] {
        match side {
            Side::Assets => &self.assets,
            Side::Liabilities => &self.liabilities,
        }
    }

    /// Mutable counterparty list for a side
    pub fn side_mut(&mut self, side: Side) -> &mut Vec<Counterparty> {
        match side {
            Side::Assets => &mut self.assets,
            Side::Liabilities => &mut self.liabilities,
        }
    }

    /// Index of the first counterparty matching `name` on a side
    pub fn position(&self, side: Side, name: &str) -> Option<usize> {
        self.side(side).iter().position(|p| p.matches(name))
    }

    /// Total of a side's outstanding amounts
    pub fn total(&self, side: Side) -> Money {
        self.side(side).iter().map(|p| p.amount).sum()
    }

    /// Sum of transaction amounts of one kind over the whole log
    pub fn total_of(&self, kind: TransactionKind) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    /// Balance recomputed from the transaction log
    pub fn replayed_balance(&self) -> Money {
        self.transactions.iter().map(|t| t.signed_amount()).sum()
    }

    /// True when nothing has ever been recorded
    pub fn is_empty(&self) -> bool {
        self.balance.is_zero()
            && self.transactions.is_empty()
            && self.assets.is_empty()
            && self.liabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_valued() {
        let state = LedgerState::default();
        assert!(state.is_empty());
        assert_eq!(state.balance, Money::zero());
    }

    #[test]
    fn test_apply_keeps_balance_in_sync() {
        let mut state = LedgerState::default();
        state.apply(Transaction::new(
            TransactionKind::Income,
            Money::from_units(5000),
            "Salary",
        ));
        state.apply(Transaction::new(
            TransactionKind::Expense,
            Money::from_units(1200),
            "Groceries",
        ));

        assert_eq!(state.balance, Money::from_units(3800));
        assert_eq!(state.replayed_balance(), state.balance);
        assert_eq!(state.total_of(TransactionKind::Income), Money::from_units(5000));
        assert_eq!(state.total_of(TransactionKind::Expense), Money::from_units(1200));
    }

    #[test]
    fn test_position_is_case_insensitive_per_side() {
        let mut state = LedgerState::default();
        state.assets.push(Counterparty::new("Amit", Money::from_units(10)));
        state.liabilities.push(Counterparty::new("Priya", Money::from_units(20)));

        assert_eq!(state.position(Side::Assets, "AMIT"), Some(0));
        assert_eq!(state.position(Side::Liabilities, "amit"), None);
        assert_eq!(state.total(Side::Liabilities), Money::from_units(20));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let state: LedgerState = serde_json::from_str(r#"{"balance": 12.5}"#).unwrap();
        assert_eq!(state.balance, Money::from_cents(1250));
        assert!(state.transactions.is_empty());
        assert!(state.assets.is_empty());
        assert!(state.liabilities.is_empty());
    }
}
