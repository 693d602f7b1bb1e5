//! Reports module for ledger-report
//!
//! Builds listings of categorized entries and composes them into the
//! earnings/expenses balance report.

pub mod balance;
pub mod listing;
pub mod options;

pub use balance::{render, BalanceReport};
pub use listing::{Listing, DEFAULT_CATEGORY};
pub use options::{Layout, ReportOptions};
