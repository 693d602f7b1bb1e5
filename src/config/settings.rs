//! User settings for ledger-report
//!
//! Default report options: layout, sort keys, default category, identifier
//! visibility, date format and column widths. Command-line flags override
//! whatever is stored here.

use serde::{Deserialize, Serialize};

use super::paths::ReportPaths;
use crate::display::{ColumnWidths, RenderOptions};
use crate::error::{ReportError, ReportResult};
use crate::models::{CategorySortKey, EntrySortKey};
use crate::reports::{Layout, ReportOptions};

/// User settings for ledger-report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Show earnings above expenses instead of side by side
    #[serde(default)]
    pub stacked_layout: bool,

    /// Order of entries within a category
    #[serde(default)]
    pub entry_sort: EntrySortKey,

    /// Order of categories within a listing
    #[serde(default)]
    pub category_sort: CategorySortKey,

    /// Category for records that name none
    #[serde(default = "default_category")]
    pub default_category: Option<String>,

    /// Whether the identifier column is displayed
    #[serde(default)]
    pub show_id: bool,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Report column widths
    #[serde(default)]
    pub column_widths: ColumnWidths,
}

fn default_schema_version() -> u32 {
    1
}

fn default_category() -> Option<String> {
    Some("Unspecified".to_string())
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            stacked_layout: false,
            entry_sort: EntrySortKey::default(),
            category_sort: CategorySortKey::default(),
            default_category: default_category(),
            show_id: false,
            date_format: default_date_format(),
            column_widths: ColumnWidths::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| ReportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Turn the stored preferences into report options
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unusable date format.
    pub fn report_options(&self) -> ReportResult<ReportOptions> {
        let render = RenderOptions::default()
            .with_widths(self.column_widths)
            .with_show_id(self.show_id)
            .with_date_format(&self.date_format)?;

        Ok(ReportOptions {
            layout: Layout::from_stacked(self.stacked_layout),
            entry_sort: self.entry_sort,
            category_sort: self.category_sort,
            default_category: self.default_category.clone(),
            render,
        })
    }
}
