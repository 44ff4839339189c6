//! Expense Ledger - personal finance tracking for the terminal
//!
//! This library provides the core of the `expense` command: a single ledger
//! holding a wallet balance, a log of income and expense transactions, the
//! people who owe the owner money (assets) and the people the owner owes
//! (liabilities). Every change is written straight back to a JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, counterparties)
//! - `storage`: JSON file storage layer
//! - `services`: The `Ledger` and its operations
//! - `reports`: Cashflow history and net worth
//! - `export`: CSV export of the transaction log
//! - `display`: Terminal formatting helpers
//! - `menu`: The interactive numbered menu
//! - `cli`: One-shot command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::LedgerPaths;
//! use expense_ledger::models::{Money, TransactionKind};
//! use expense_ledger::services::Ledger;
//!
//! let paths = LedgerPaths::new()?;
//! let mut ledger = Ledger::open(&paths)?;
//! ledger.record_transaction(Money::from_units(5000), "Salary", TransactionKind::Income)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod menu;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
