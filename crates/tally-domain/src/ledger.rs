//! The in-memory transaction store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::transaction::Transaction;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Owns the ordered collection of transactions. Insertion order is the
/// canonical order: filters and exports reproduce it, nothing resorts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub name: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Appends a record as-is and returns its id. Validation belongs to the
    /// service layer; this only maintains ordering and bookkeeping.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Read-only view of the store in insertion order.
    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn contains_id(&self, id: Uuid) -> bool {
        self.transactions.iter().any(|txn| txn.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;
    use chrono::NaiveDate;

    #[test]
    fn add_transaction_keeps_insertion_order() {
        let mut ledger = Ledger::new("Test");
        for day in 1..=3 {
            let txn = Transaction::new(
                NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
                TransactionKind::Expense,
                "Other",
                -1.0 * day as f64,
            );
            ledger.add_transaction(txn);
        }
        let days: Vec<u32> = ledger
            .snapshot()
            .iter()
            .map(|txn| txn.date.format("%d").to_string().parse().unwrap())
            .collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert_eq!(ledger.transaction_count(), 3);
    }

    #[test]
    fn ledger_round_trips_through_json() {
        let mut ledger = Ledger::new("RoundTrip");
        let id = ledger.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            TransactionKind::Income,
            "Salary",
            5000.0,
        ));
        let json = serde_json::to_string(&ledger).expect("serialize ledger");
        let loaded: Ledger = serde_json::from_str(&json).expect("deserialize ledger");
        assert_eq!(loaded.name, "RoundTrip");
        assert_eq!(loaded.schema_version, Ledger::schema_version_default());
        assert_eq!(loaded.transaction(id), ledger.transaction(id));
    }
}
