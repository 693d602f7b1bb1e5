//! Storage layer for ledger-report
//!
//! The report itself never touches the disk; this layer reads records
//! containers exported by a ledger backend.

pub mod file_io;

pub use file_io::{read_records, FileFormat};
