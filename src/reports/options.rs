//! Options of a balance report

use std::str::FromStr;

use crate::display::RenderOptions;
use crate::error::ReportError;
use crate::models::{CategorySortKey, EntrySortKey};

/// Arrangement of the earnings and expenses listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Row-aligned, earnings on the left
    #[default]
    SideBySide,
    /// Earnings above expenses
    Stacked,
}

impl Layout {
    /// Pick the layout from a "stacked" flag
    pub fn from_stacked(stacked: bool) -> Self {
        if stacked {
            Self::Stacked
        } else {
            Self::SideBySide
        }
    }
}

impl FromStr for Layout {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "side-by-side" => Ok(Self::SideBySide),
            "stacked" => Ok(Self::Stacked),
            other => Err(ReportError::unknown_option("layout", other)),
        }
    }
}

/// Everything `render` needs besides the records
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportOptions {
    /// Layout of the two listings
    pub layout: Layout,
    /// Order of entries within a category
    pub entry_sort: EntrySortKey,
    /// Order of categories within a listing
    pub category_sort: CategorySortKey,
    /// Category for records that name none
    pub default_category: Option<String>,
    /// Column widths, id visibility and date format
    pub render: RenderOptions,
}
