//! Validated mutations for the transaction store.

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use tally_domain::{Ledger, Transaction, TransactionDraft};

/// Provides validated mutations for [`Transaction`] entries.
///
/// Every operation validates its input in full before touching the ledger,
/// so a failed call leaves the store exactly as it was.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction from a draft, minting a fresh id and appending
    /// it to the end of the store.
    pub fn add(ledger: &mut Ledger, draft: TransactionDraft) -> CoreResult<Transaction> {
        let (date, amount) = Self::validate_draft(&draft)?;
        let transaction = Transaction::new(date, draft.kind, draft.category, amount);
        let stored = transaction.clone();
        ledger.add_transaction(transaction);
        Ok(stored)
    }

    /// Replaces every field of the transaction with the given id. The id
    /// itself never changes.
    pub fn update(ledger: &mut Ledger, id: Uuid, draft: TransactionDraft) -> CoreResult<Transaction> {
        let (date, amount) = Self::validate_draft(&draft)?;
        let transaction = ledger
            .transaction_mut(id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        transaction.date = date;
        transaction.kind = draft.kind;
        transaction.category = draft.category;
        transaction.amount = amount;
        let stored = transaction.clone();
        ledger.touch();
        Ok(stored)
    }

    /// Removes the transaction with the given id.
    ///
    /// Removing an id the store does not hold is an error, not a no-op.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> CoreResult<()> {
        let before = ledger.transactions.len();
        ledger.transactions.retain(|txn| txn.id != id);
        if ledger.transactions.len() == before {
            return Err(CoreError::TransactionNotFound(id));
        }
        ledger.touch();
        Ok(())
    }

    /// Appends a batch of records, preserving their order. Backs import:
    /// imported records extend the store, they never replace it.
    pub fn append_all(ledger: &mut Ledger, records: Vec<Transaction>) -> CoreResult<()> {
        Self::ensure_unique_ids(ledger.snapshot().iter().chain(records.iter()))?;
        for record in records {
            ledger.transactions.push(record);
        }
        ledger.touch();
        Ok(())
    }

    /// Swaps the store's contents for the given records. Backs re-import of
    /// a previously exported snapshot, ids included.
    pub fn replace_all(ledger: &mut Ledger, records: Vec<Transaction>) -> CoreResult<()> {
        Self::ensure_unique_ids(records.iter())?;
        debug!(count = records.len(), "replacing ledger contents");
        ledger.transactions = records;
        ledger.touch();
        Ok(())
    }

    fn validate_draft(draft: &TransactionDraft) -> CoreResult<(chrono::NaiveDate, f64)> {
        let date = draft
            .date
            .ok_or_else(|| CoreError::Validation("date is required".into()))?;
        let amount = draft
            .amount
            .ok_or_else(|| CoreError::Validation("amount is required".into()))?;
        if !amount.is_finite() {
            return Err(CoreError::Validation(format!(
                "amount `{amount}` is not a finite number"
            )));
        }
        Ok((date, amount))
    }

    fn ensure_unique_ids<'a>(records: impl Iterator<Item = &'a Transaction>) -> CoreResult<()> {
        let mut seen = HashSet::new();
        for record in records {
            if !seen.insert(record.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate transaction id `{}`",
                    record.id
                )));
            }
        }
        Ok(())
    }
}
