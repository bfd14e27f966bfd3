//! Domain models for ledger transactions.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Category names offered to presentation layers as defaults. The data model
/// treats `category` as an open string; this list is a suggestion, not a
/// constraint, and imported records may carry any category.
pub const SUGGESTED_CATEGORIES: [&str; 5] =
    ["Salary", "Groceries", "Bills", "Entertainment", "Other"];

/// A single ledger entry: one income or expense with a signed amount.
///
/// Amounts keep the sign the caller supplied. A negative income is stored
/// faithfully and flows through summaries unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            kind,
            category: category.into(),
            amount,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{}]", self.id, self.kind)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Distinguishes the two sides of the ledger.
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = UnknownKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Income" => Ok(TransactionKind::Income),
            "Expense" => Ok(TransactionKind::Expense),
            other => Err(UnknownKindError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when a transaction kind label is neither `Income` nor `Expense`.
pub struct UnknownKindError(pub String);

impl fmt::Display for UnknownKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown transaction type `{}`", self.0)
    }
}

impl std::error::Error for UnknownKindError {}

/// A transaction as submitted by a caller, before an id exists.
///
/// `date` and `amount` are optional so an unfilled form field is
/// representable; validation happens in the service layer, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Option<f64>,
}

impl TransactionDraft {
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: Some(date),
            kind,
            category: category.into(),
            amount: Some(amount),
        }
    }

    /// Copies every field of an existing record, e.g. to seed an edit form.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            date: Some(transaction.date),
            kind: transaction.kind,
            category: transaction.category.clone(),
            amount: Some(transaction.amount),
        }
    }
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self {
            date: None,
            kind: TransactionKind::Income,
            category: SUGGESTED_CATEGORIES[0].to_string(),
            amount: None,
        }
    }
}
