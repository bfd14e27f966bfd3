//! Pure filtered views over a ledger snapshot.

use tally_domain::{Ledger, Transaction, TransactionFilter};

/// Computes filtered views of the store.
///
/// Filtering is a stable linear scan over the snapshot: output order always
/// matches store order, and the ledger is never mutated.
pub struct FilterService;

impl FilterService {
    pub fn apply<'a>(ledger: &'a Ledger, filter: &TransactionFilter) -> Vec<&'a Transaction> {
        ledger
            .snapshot()
            .iter()
            .filter(|txn| filter.matches(txn))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_domain::TransactionKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new("Test");
        ledger.add_transaction(Transaction::new(
            date(2023, 1, 1),
            TransactionKind::Income,
            "Salary",
            5000.0,
        ));
        ledger.add_transaction(Transaction::new(
            date(2023, 1, 5),
            TransactionKind::Expense,
            "Groceries",
            -150.0,
        ));
        ledger.add_transaction(Transaction::new(
            date(2023, 1, 10),
            TransactionKind::Expense,
            "Bills",
            -300.0,
        ));
        ledger
    }

    #[test]
    fn empty_filter_returns_full_snapshot_in_order() {
        let ledger = sample_ledger();
        let view = FilterService::apply(&ledger, &TransactionFilter::default());
        let expected: Vec<&Transaction> = ledger.snapshot().iter().collect();
        assert_eq!(view, expected);
    }

    #[test]
    fn kind_and_date_from_combine() {
        let ledger = sample_ledger();
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Expense),
            date_from: Some(date(2023, 1, 6)),
            ..Default::default()
        };
        let view = FilterService::apply(&ledger, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].category, "Bills");
    }

    #[test]
    fn category_filter_is_exact() {
        let ledger = sample_ledger();
        let filter = TransactionFilter {
            category: Some("Groceries".into()),
            ..Default::default()
        };
        let view = FilterService::apply(&ledger, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].amount, -150.0);
    }

    #[test]
    fn date_to_bound_is_inclusive() {
        let ledger = sample_ledger();
        let filter = TransactionFilter {
            date_to: Some(date(2023, 1, 5)),
            ..Default::default()
        };
        let view = FilterService::apply(&ledger, &filter);
        assert_eq!(view.len(), 2);
        assert_eq!(view[1].category, "Groceries");
    }
}
