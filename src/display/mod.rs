//! Display formatting for terminal output
//!
//! Provides the fixed-width text helpers and the rendering configuration that
//! entry, listing and report rendering share.

pub mod format;
pub mod options;

pub use format::{capitalize, center, left_align, right_align, rule, title_case};
pub use options::{ColumnWidths, RenderOptions, INDENT};
