//! Record filtering
//!
//! Narrows a records container down before it is rendered. Filters are given
//! as `field=pattern` and match case-insensitive substrings of the record's
//! name, date or category. A record is kept only if every filter matches.

use std::str::FromStr;

use crate::error::{ReportError, ReportResult};
use crate::models::{Record, RecordsContainer};

/// Record field a filter looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Date,
    Category,
}

impl FromStr for FilterField {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "date" => Ok(Self::Date),
            "category" => Ok(Self::Category),
            other => Err(ReportError::Validation(format!(
                "Unknown filter field '{}'. Use name, date or category",
                other
            ))),
        }
    }
}

/// A single `field=pattern` filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    field: FilterField,
    pattern: String,
}

impl RecordFilter {
    /// Create a filter; the pattern is matched case-insensitively
    pub fn new(field: FilterField, pattern: &str) -> Self {
        Self {
            field,
            pattern: pattern.to_lowercase(),
        }
    }

    /// Check whether a record matches
    pub fn matches(&self, record: &Record) -> bool {
        let value = match self.field {
            FilterField::Name => record.name.as_deref(),
            FilterField::Date => record.date.as_deref(),
            FilterField::Category => record.category.as_deref(),
        };
        value.is_some_and(|v| v.to_lowercase().contains(&self.pattern))
    }
}

impl FromStr for RecordFilter {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, pattern) = s.split_once('=').ok_or_else(|| {
            ReportError::Validation(format!(
                "Invalid filter '{}'. Use field=pattern, e.g. category=groceries",
                s
            ))
        })?;

        if pattern.is_empty() {
            return Err(ReportError::Validation(format!(
                "Filter '{}' has an empty pattern",
                s
            )));
        }

        Ok(Self::new(field.trim().parse()?, pattern))
    }
}

/// A set of filters that must all match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilters(Vec<RecordFilter>);

impl RecordFilters {
    /// Parse filters from `field=pattern` strings
    pub fn parse<S: AsRef<str>>(filters: &[S]) -> ReportResult<Self> {
        filters
            .iter()
            .map(|f| f.as_ref().parse())
            .collect::<ReportResult<Vec<_>>>()
            .map(Self)
    }

    /// Check if no filters are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether a record passes every filter
    pub fn matches(&self, record: &Record) -> bool {
        self.0.iter().all(|f| f.matches(record))
    }

    /// Copy of the container holding only matching records; recurring series
    /// left without occurrences are dropped
    pub fn apply(&self, container: &RecordsContainer) -> RecordsContainer {
        if self.is_empty() {
            return container.clone();
        }

        let standard = container
            .standard
            .iter()
            .filter(|(_, record)| self.matches(record))
            .map(|(id, record)| (id.clone(), record.clone()))
            .collect();

        let recurrent = container
            .recurrent
            .iter()
            .filter_map(|(id, occurrences)| {
                let kept: Vec<Record> = occurrences
                    .iter()
                    .filter(|record| self.matches(record))
                    .cloned()
                    .collect();
                (!kept.is_empty()).then(|| (id.clone(), kept))
            })
            .collect();

        RecordsContainer {
            standard,
            recurrent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> RecordsContainer {
        let mut container = RecordsContainer::default();
        container.standard.insert(
            "1".into(),
            Record::new("Beer", -4.0).with_category("Drinks"),
        );
        container.standard.insert(
            "2".into(),
            Record::new("bread", -2.0).with_category("groceries"),
        );
        container.recurrent.insert(
            "3".into(),
            vec![
                Record::new("rent", -600.0).with_date("2019-01-01"),
                Record::new("rent", -600.0).with_date("2019-02-01"),
            ],
        );
        container
    }

    #[test]
    fn test_parse_filter() {
        let filter: RecordFilter = "category=Groceries".parse().unwrap();
        assert_eq!(filter, RecordFilter::new(FilterField::Category, "groceries"));
    }

    #[test]
    fn test_parse_invalid_filters() {
        assert!("category".parse::<RecordFilter>().unwrap_err().is_validation());
        assert!("value=3".parse::<RecordFilter>().unwrap_err().is_validation());
        assert!("name=".parse::<RecordFilter>().unwrap_err().is_validation());
    }

    #[test]
    fn test_name_filter_is_case_insensitive() {
        let filters = RecordFilters::parse(&["name=BEER"]).unwrap();
        let filtered = filters.apply(&container());
        assert_eq!(filtered.standard.len(), 1);
        assert!(filtered.standard.contains_key("1"));
        assert!(filtered.recurrent.is_empty());
    }

    #[test]
    fn test_date_filter_keeps_matching_occurrences() {
        let filters = RecordFilters::parse(&["date=2019-02"]).unwrap();
        let filtered = filters.apply(&container());
        assert!(filtered.standard.is_empty());
        assert_eq!(filtered.recurrent["3"].len(), 1);
    }

    #[test]
    fn test_all_filters_must_match() {
        let filters = RecordFilters::parse(&["name=b", "category=drinks"]).unwrap();
        let filtered = filters.apply(&container());
        assert_eq!(filtered.standard.keys().collect::<Vec<_>>(), vec!["1"]);
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let filters = RecordFilters::parse::<&str>(&[]).unwrap();
        assert!(filters.is_empty());
        assert_eq!(filters.apply(&container()), container());
    }
}
