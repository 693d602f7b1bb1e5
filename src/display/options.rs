//! Rendering configuration
//!
//! Column widths, identifier visibility and the date format travel together in
//! an immutable [`RenderOptions`] value that every render call receives, so two
//! reports rendered side by side with different settings never interfere.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Indentation of entry lines below their category line
pub const INDENT: usize = 2;

/// Fixed column widths of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidths {
    /// Width of the entry name column
    #[serde(default = "default_name_width")]
    pub name: usize,
    /// Width of the value column
    #[serde(default = "default_value_width")]
    pub value: usize,
    /// Width of the date column
    #[serde(default = "default_date_width")]
    pub date: usize,
    /// Width of the identifier column
    #[serde(default = "default_id_width")]
    pub id: usize,
}

fn default_name_width() -> usize {
    16
}

fn default_value_width() -> usize {
    8
}

fn default_date_width() -> usize {
    10
}

fn default_id_width() -> usize {
    6
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            name: default_name_width(),
            value: default_value_width(),
            date: default_date_width(),
            id: default_id_width(),
        }
    }
}

impl ColumnWidths {
    /// Width of the name column on category lines (entry name plus indent)
    pub fn category_name(&self) -> usize {
        self.name + INDENT
    }
}

/// Everything a single render call needs to lay out entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    widths: ColumnWidths,
    show_id: bool,
    date_format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            widths: ColumnWidths::default(),
            show_id: false,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl RenderOptions {
    /// Enable or disable the identifier column
    pub fn with_show_id(mut self, show_id: bool) -> Self {
        self.show_id = show_id;
        self
    }

    /// Replace the column widths
    pub fn with_widths(mut self, widths: ColumnWidths) -> Self {
        self.widths = widths;
        self
    }

    /// Replace the date format, rejecting strings chrono cannot format with
    pub fn with_date_format(mut self, date_format: &str) -> ReportResult<Self> {
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ReportError::Config(format!(
                "Invalid date format: {}",
                date_format
            )));
        }
        self.date_format = date_format.to_string();
        Ok(self)
    }

    /// Column widths
    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// Whether the identifier column is displayed
    pub fn show_id(&self) -> bool {
        self.show_id
    }

    /// strftime format used for entry dates
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Total width of a category block line, separators included
    pub fn total_width(&self) -> usize {
        let w = &self.widths;
        let width = w.category_name() + 1 + w.value + 1 + w.date;
        if self.show_id {
            width + 1 + w.id
        } else {
            width
        }
    }
}
