//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{Money, Side};

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Numeric text that could not be read as an amount
    #[error("Invalid number: {0}")]
    InvalidAmount(String),

    /// A name missing from the lending or borrowing list
    #[error("{name} is not in your {list}")]
    NotFound { list: &'static str, name: String },

    /// A repayment or return larger than what is outstanding
    #[error("Amount {requested} exceeds the {owed} outstanding with {name}")]
    Overpayment {
        name: String,
        requested: Money,
        owed: Money,
    },

    /// The export destination could not be opened (usually open in another program)
    #[error("Cannot write {0}: close the file and try again")]
    ExportLocked(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for a counterparty list
    pub fn not_in_list(side: Side, name: impl Into<String>) -> Self {
        Self::NotFound {
            list: side.label(),
            name: name.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Business-rule violations: nothing was changed, the session can continue
    pub fn is_business_rule(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Overpayment { .. })
    }

    /// Errors a caller should report and move on from, rather than stop
    pub fn is_recoverable(&self) -> bool {
        self.is_business_rule()
            || matches!(self, Self::InvalidAmount(_) | Self::ExportLocked(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
