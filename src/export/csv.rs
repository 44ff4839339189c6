//! CSV Export functionality
//!
//! Writes the transaction log as a spreadsheet-friendly table.

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Header row of the transaction report
pub const TRANSACTIONS_HEADER: [&str; 4] = ["Date", "Type", "Category", "Amount"];

/// What an export did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The log is empty; no file was touched
    NothingToExport,
    /// The report was written
    Written { path: PathBuf, rows: usize },
}

/// Write transactions as CSV to any writer, header first, in log order
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> LedgerResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(TRANSACTIONS_HEADER)?;

    for txn in transactions {
        wtr.write_record([
            txn.date_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            format!("{:.2}", txn.amount.as_f64()),
        ])?;
    }

    wtr.flush()
        .map_err(|e| LedgerError::Export(format!("Failed to flush CSV: {}", e)))?;
    Ok(())
}

/// Export transactions to `path`, overwriting any previous report
///
/// An empty log writes nothing. A destination that cannot be opened because
/// of permissions (typically the file is open in a spreadsheet) is reported
/// as `LedgerError::ExportLocked`.
pub fn export_transactions_csv(
    transactions: &[Transaction],
    path: &Path,
) -> LedgerResult<ExportOutcome> {
    if transactions.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let file = File::create(path).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => LedgerError::ExportLocked(path.display().to_string()),
        _ => LedgerError::Io(format!("Failed to create {}: {}", path.display(), e)),
    })?;

    write_transactions_csv(transactions, BufWriter::new(file))?;
    info!(
        "exported {} transactions to {}",
        transactions.len(),
        path.display()
    );

    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        rows: transactions.len(),
    })
}
