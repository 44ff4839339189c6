//! Service layer for the expense ledger
//!
//! The service layer provides the bookkeeping rules on top of the storage
//! layer: balance updates, counterparty bookkeeping and export.

pub mod ledger;

pub use ledger::{CashflowSummary, Ledger, NetWorth, Settlement};
