//! Reports module for the expense ledger
//!
//! Provides the income/expense history and the net worth summary.

pub mod cashflow;
pub mod net_worth;

pub use cashflow::{CashflowEntry, CashflowReport};
pub use net_worth::NetWorthReport;
