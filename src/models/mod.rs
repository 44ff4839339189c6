//! Core data models for the expense ledger
//!
//! This module contains the data structures stored in the ledger file:
//! money amounts, transactions, counterparties and the ledger record itself.

pub mod counterparty;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use counterparty::Counterparty;
pub use ledger::{LedgerState, Side};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TIMESTAMP_FORMAT, UNKNOWN_DATE};
