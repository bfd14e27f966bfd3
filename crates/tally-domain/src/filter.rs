//! Optional predicates narrowing a ledger snapshot for display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionKind};

/// Optional predicates over a snapshot. Every unset field passes everything,
/// so the default filter matches every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionFilter {
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.category.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Date bounds are inclusive on both ends.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &transaction.category != category {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if transaction.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if transaction.date > to {
                return false;
            }
        }
        true
    }
}
