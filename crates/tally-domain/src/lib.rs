//! tally-domain
//!
//! Pure domain models (Ledger, Transaction, filters, summaries).
//! No I/O, no storage. Only data types and core enums.

pub mod common;
pub mod filter;
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use common::*;
pub use filter::*;
pub use ledger::*;
pub use summary::*;
pub use transaction::*;
