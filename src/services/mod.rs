//! Service layer for ledger-report
//!
//! Operations on records that sit between the storage layer and the report:
//! currently record filtering.

pub mod filter;

pub use filter::{FilterField, RecordFilter, RecordFilters};
