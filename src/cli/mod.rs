//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report layer.

pub mod print;

pub use print::{handle_print_command, PrintArgs};
