//! tally-core
//!
//! Business logic and services over a [`tally_domain::Ledger`].
//! Depends on tally-domain. No CLI, no terminal I/O, no direct storage
//! interactions.

pub mod error;
pub mod filter_service;
pub mod summary_service;
pub mod transaction_service;

pub use error::{CoreError, CoreResult};
pub use filter_service::*;
pub use summary_service::*;
pub use transaction_service::*;
