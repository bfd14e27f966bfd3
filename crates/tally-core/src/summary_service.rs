//! Aggregation over the full transaction store.

use tally_domain::{Ledger, LedgerSummary, TransactionKind};

/// Aggregates ledger data for summary display.
///
/// Summaries are always computed over the **full** store, independent of any
/// active filter. Filter and summary are separate views by contract.
pub struct SummaryService;

impl SummaryService {
    /// Single pass over the snapshot. Income amounts accumulate into
    /// `income`; every other record accumulates into `expenses` and into its
    /// category bucket. Raw signs are preserved, so a negative income stays
    /// negative and a positively-signed expense inflates `expenses`.
    pub fn summarize(ledger: &Ledger) -> LedgerSummary {
        let mut summary = LedgerSummary::default();
        for txn in ledger.snapshot() {
            summary.balance += txn.amount;
            match txn.kind {
                TransactionKind::Income => summary.income += txn.amount,
                TransactionKind::Expense => {
                    summary.expenses += txn.amount;
                    *summary.by_category.entry(txn.category.clone()).or_insert(0.0) +=
                        txn.amount;
                }
            }
        }
        summary
    }
}
