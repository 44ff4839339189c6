//! Counterparty model
//!
//! A person who owes the ledger owner money (an asset) or who is owed money
//! by the owner (a liability). Names are matched case-insensitively.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Someone with an outstanding balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    /// Name as first entered
    pub name: String,

    /// Outstanding amount, always positive while the record exists
    pub amount: Money,

    /// Last time money was lent to them (assets only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Counterparty {
    /// Create a counterparty without a date
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
            date: None,
        }
    }

    /// Create a counterparty touched on `date`
    pub fn dated(name: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            amount,
            date: Some(date),
        }
    }

    /// Normalize a name for case-insensitive comparison
    pub fn normalize_name(name: &str) -> String {
        name.to_lowercase()
    }

    /// Check whether this record is identified by `name`
    pub fn matches(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// A record at or below zero is settled and must be dropped
    pub fn is_settled(&self) -> bool {
        !self.amount.is_positive()
    }
}

impl fmt::Display for Counterparty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.amount)
    }
}
