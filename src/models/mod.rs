//! Core data models for ledger-report
//!
//! This module contains the data structures of the reporting domain: raw
//! records as stored by the backend, the entries built from them, amounts, and
//! the keys that order them.

pub mod entry;
pub mod money;
pub mod record;
pub mod sort;

pub use entry::{CategoryEntry, Entry, LeafEntry};
pub use money::Money;
pub use record::{Record, RecordsContainer};
pub use sort::{CategorySortKey, EntrySortKey};
