//! ledger-report - earnings and expenses reports from ledger records
//!
//! This library turns the flat records of a ledger period into a
//! column-aligned text report: records are grouped by category, split into
//! earnings and expenses, and the two listings are laid out side by side or
//! stacked.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, entries, amounts and sort keys
//! - `display`: Fixed-width formatting and rendering options
//! - `reports`: Listings and the balance report composer
//! - `storage`: Records file reading
//! - `services`: Record filtering
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use ledger_report::models::{Record, RecordsContainer};
//! use ledger_report::reports::{render, ReportOptions};
//!
//! let mut records = RecordsContainer::default();
//! records
//!     .standard
//!     .insert("1".into(), Record::new("salary", 1500.0).with_category("work"));
//!
//! let report = render(&records, &ReportOptions::default())?;
//! assert!(report.contains("Salary"));
//! # Ok::<(), ledger_report::ReportError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ReportError, ReportResult};
