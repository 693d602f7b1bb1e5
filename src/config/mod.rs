//! Configuration module for ledger-report
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Report preferences

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::Settings;
