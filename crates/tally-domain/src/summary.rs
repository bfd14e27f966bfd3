//! Aggregated income/expense totals over a full ledger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Totals computed in a single pass over the whole store. Signs are never
/// normalized: `expenses` for a ledger of negative expense amounts is
/// itself negative, and `balance` is the raw sum of every amount.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerSummary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    /// Expense totals keyed by category. Income records never appear here.
    pub by_category: BTreeMap<String, f64>,
}
