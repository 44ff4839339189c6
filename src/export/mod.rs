//! Export module for the expense ledger
//!
//! Provides CSV export of the transaction log.

pub mod csv;

pub use self::csv::{export_transactions_csv, write_transactions_csv, ExportOutcome};
