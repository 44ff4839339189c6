//! CLI command for data export

use crate::display::format_export;
use crate::error::LedgerResult;
use crate::services::Ledger;

/// Write the transaction log to the report file
pub fn handle_export_command(ledger: &Ledger) -> LedgerResult<()> {
    let outcome = ledger.export_csv()?;
    println!("{}", format_export(&outcome));
    Ok(())
}
