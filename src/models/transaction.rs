//! Transaction model
//!
//! A transaction is one cash movement in or out of the wallet. Transactions
//! are never edited after they are recorded.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Timestamp layout used in the ledger file and in reports
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shown in place of a missing timestamp
pub const UNKNOWN_DATE: &str = "N/A";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming into the wallet
    Income,
    /// Money leaving the wallet
    Expense,
}

impl TransactionKind {
    /// The effect of an amount of this kind on the wallet balance
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }

    /// Lowercase name, as stored on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded cash movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the transaction was recorded (local time, second precision).
    /// Hand-edited files may leave it out.
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Always recorded as a positive amount; `kind` carries the direction
    pub amount: Money,

    /// Free-text label ("Salary", "Lent to Amit")
    pub category: String,
}

impl Transaction {
    /// Create a transaction stamped with the current local time
    pub fn new(kind: TransactionKind, amount: Money, category: impl Into<String>) -> Self {
        Self::at(now(), kind, amount, category)
    }

    /// Create a transaction with an explicit timestamp
    pub fn at(
        date: NaiveDateTime,
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date: Some(date),
            kind,
            amount,
            category: category.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with the sign it applies to the balance
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }

    /// Timestamp formatted the way it is stored, or "N/A" when missing
    pub fn date_string(&self) -> String {
        self.date
            .map(|d| d.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date_string(),
            self.kind,
            self.amount,
            self.category
        )
    }
}

/// Current local time truncated to whole seconds
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.collect_str(&date.format(TIMESTAMP_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
