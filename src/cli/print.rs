//! Print command
//!
//! Reads a records file, applies filters and renders the balance report.
//! Flags given on the command line take precedence over stored settings.

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::config::Settings;
use crate::error::ReportResult;
use crate::models::{CategorySortKey, EntrySortKey};
use crate::reports::{render, ReportOptions};
use crate::services::RecordFilters;
use crate::storage::read_records;

/// Arguments of the print command
#[derive(Args, Debug, Clone, Default)]
pub struct PrintArgs {
    /// Records file (JSON, or YAML with a .yaml/.yml extension)
    pub file: PathBuf,

    /// Display earnings and expenses stacked instead of side by side
    #[arg(short, long)]
    pub stacked_layout: bool,

    /// Order of entries within a category
    #[arg(long, value_enum)]
    pub entry_sort: Option<EntrySortKey>,

    /// Order of categories within a listing
    #[arg(long, value_enum)]
    pub category_sort: Option<CategorySortKey>,

    /// Category for records that name none
    #[arg(short = 'c', long)]
    pub default_category: Option<String>,

    /// Show the identifier column
    #[arg(long)]
    pub show_id: bool,

    /// Filter for name, date and/or category substring, e.g. name=beer category=groceries
    #[arg(short, long, num_args = 1..)]
    pub filters: Vec<String>,
}

impl PrintArgs {
    /// Merge the flags over the stored settings
    pub fn report_options(&self, settings: &Settings) -> ReportResult<ReportOptions> {
        let mut settings = settings.clone();

        if self.stacked_layout {
            settings.stacked_layout = true;
        }
        if let Some(key) = self.entry_sort {
            settings.entry_sort = key;
        }
        if let Some(key) = self.category_sort {
            settings.category_sort = key;
        }
        if let Some(category) = &self.default_category {
            settings.default_category = Some(category.clone());
        }
        if self.show_id {
            settings.show_id = true;
        }

        settings.report_options()
    }
}

/// Handle the print command, returning the rendered report
pub fn handle_print_command(settings: &Settings, args: &PrintArgs) -> ReportResult<String> {
    let options = args.report_options(settings)?;
    let filters = RecordFilters::parse(args.filters.as_slice())?;

    let container = read_records(&args.file)?;
    let container = filters.apply(&container);
    info!(
        file = %args.file.display(),
        standard = container.standard.len(),
        recurrent = container.recurrent.len(),
        "rendering records"
    );

    render(&container, &options)
}
