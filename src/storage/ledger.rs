//! Ledger file storage
//!
//! Loads and saves the whole `LedgerState` as one JSON document. Files written
//! by older versions keep receivables under `debts`; those are moved to
//! `assets` when the file is read.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::error::LedgerError;
use crate::models::LedgerState;

use super::file_io::{read_json_opt, write_json_atomic};

/// Field name older files used for receivables
const LEGACY_ASSETS_FIELD: &str = "debts";

/// Reads and writes the ledger file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a ledger file has been written yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the ledger, or a zero-valued one if the file doesn't exist
    pub fn load(&self) -> Result<LedgerState, LedgerError> {
        let Some(raw) = read_json_opt::<Value, _>(&self.path)? else {
            debug!("no ledger at {}, starting empty", self.path.display());
            return Ok(LedgerState::default());
        };

        let Value::Object(mut fields) = raw else {
            return Err(LedgerError::Storage(format!(
                "Failed to parse {}: expected a JSON object",
                self.path.display()
            )));
        };

        if migrate_legacy_fields(&mut fields) {
            warn!(
                "migrated legacy '{}' field to 'assets' in {}",
                LEGACY_ASSETS_FIELD,
                self.path.display()
            );
        }

        let state: LedgerState = serde_json::from_value(Value::Object(fields)).map_err(|e| {
            LedgerError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        debug!(
            "loaded ledger from {} ({} transactions)",
            self.path.display(),
            state.transactions.len()
        );
        Ok(state)
    }

    /// Overwrite the ledger file with `state`
    pub fn save(&self, state: &LedgerState) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, state)?;
        debug!(
            "saved ledger to {} ({} transactions)",
            self.path.display(),
            state.transactions.len()
        );
        Ok(())
    }
}

/// Move `debts` into `assets`; returns whether anything was migrated
fn migrate_legacy_fields(fields: &mut Map<String, Value>) -> bool {
    match fields.remove(LEGACY_ASSETS_FIELD) {
        Some(debts) => {
            fields.insert("assets".to_string(), debts);
            true
        }
        None => false,
    }
}
