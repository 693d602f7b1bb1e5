//! Sort keys for report rendering
//!
//! Entry lines inside a category and the categories of a listing are ordered
//! by one of these keys, ascending. Sorting is always stable, so insertion
//! order only shows through where keys tie.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// Field that orders entry lines within a category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EntrySortKey {
    /// Entry name (default)
    #[default]
    Name,
    /// Entry value
    Value,
    /// Entry date; undated entries sort first
    Date,
    /// Entry identifier
    Id,
}

/// Field that orders the categories of a listing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CategorySortKey {
    /// Category name
    Name,
    /// Category total (default)
    #[default]
    Value,
}

impl EntrySortKey {
    /// The key's name as used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Value => "value",
            Self::Date => "date",
            Self::Id => "id",
        }
    }
}

impl CategorySortKey {
    /// The key's name as used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for EntrySortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CategorySortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntrySortKey {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "value" => Ok(Self::Value),
            "date" => Ok(Self::Date),
            "id" => Ok(Self::Id),
            other => Err(ReportError::unknown_option("entry sort key", other)),
        }
    }
}

impl FromStr for CategorySortKey {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "value" => Ok(Self::Value),
            other => Err(ReportError::unknown_option("category sort key", other)),
        }
    }
}
