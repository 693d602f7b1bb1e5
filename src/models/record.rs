//! Raw ledger records as delivered by the storage layer
//!
//! Records are loose field mappings: every field is optional at this level so
//! that a record missing `name` or `value` can still be read and reported as a
//! construction error later, instead of failing the whole file parse.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single raw ledger record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display name of the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Signed amount; positive values are earnings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Calendar date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Category the entry is listed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Identifier, attached when the container is flattened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Record {
    /// Create a record with the two required fields set
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value),
            ..Default::default()
        }
    }

    /// Set the record date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the record category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Return a copy of this record carrying the given identifier
    pub fn with_id(&self, id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..self.clone()
        }
    }
}

/// Records of one period, partitioned the way the backend stores them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsContainer {
    /// Single records keyed by identifier
    #[serde(default)]
    pub standard: BTreeMap<String, Record>,

    /// Recurring series keyed by identifier, one record per occurrence
    #[serde(default)]
    pub recurrent: BTreeMap<String, Vec<Record>>,
}

impl RecordsContainer {
    /// Check if the container holds no records at all
    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.recurrent.values().all(Vec::is_empty)
    }

    /// Flatten into a single sequence of records with their `id` attached
    ///
    /// Standard records come first (in key order), followed by every
    /// occurrence of every recurring series. Occurrences of one series share
    /// the series identifier.
    pub fn flatten(&self) -> Vec<Record> {
        let standard = self
            .standard
            .iter()
            .map(|(id, record)| record.with_id(id));

        let recurrent = self.recurrent.iter().flat_map(|(id, occurrences)| {
            occurrences
                .iter()
                .map(move |record| record.with_id(id))
        });

        standard.chain(recurrent).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = Record::new("Groceries", -42.5)
            .with_date("2016-08-10")
            .with_category("Food");
        assert_eq!(record.name.as_deref(), Some("Groceries"));
        assert_eq!(record.value, Some(-42.5));
        assert_eq!(record.date.as_deref(), Some("2016-08-10"));
        assert_eq!(record.category.as_deref(), Some("Food"));
        assert!(record.id.is_none());
    }

    #[test]
    fn test_deserialize_partial_container() {
        let json = r#"{"standard": {"1": {"name": "beer", "value": -3.5}}}"#;
        let container: RecordsContainer = serde_json::from_str(json).unwrap();
        assert_eq!(container.standard.len(), 1);
        assert!(container.recurrent.is_empty());
        assert!(!container.is_empty());
    }

    #[test]
    fn test_empty_series_counts_as_empty() {
        let mut container = RecordsContainer::default();
        assert!(container.is_empty());
        container.recurrent.insert("7".into(), Vec::new());
        assert!(container.is_empty());
    }

    #[test]
    fn test_flatten_attaches_ids() {
        let mut container = RecordsContainer::default();
        container
            .standard
            .insert("1".into(), Record::new("salary", 2000.0));
        container.recurrent.insert(
            "2".into(),
            vec![
                Record::new("rent", -800.0).with_date("2019-01-01"),
                Record::new("rent", -800.0).with_date("2019-02-01"),
            ],
        );

        let flat = container.flatten();
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].id.as_deref(), Some("1"));
        assert_eq!(flat[1].id.as_deref(), Some("2"));
        assert_eq!(flat[2].id.as_deref(), Some("2"));
        assert_eq!(flat[2].date.as_deref(), Some("2019-02-01"));

        // The container itself is left untouched
        assert!(container.standard["1"].id.is_none());
    }
}
