//! Entry types of a listing
//!
//! A [`LeafEntry`] is one ledger line; a [`CategoryEntry`] groups leaf entries
//! and keeps a running total of their values. [`Entry`] is the tagged union of
//! both that a listing accepts.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

use super::money::Money;
use super::record::Record;
use super::sort::EntrySortKey;
use crate::display::{left_align, right_align, title_case, RenderOptions, INDENT};
use crate::error::{ReportError, ReportResult};

/// Date format of record dates
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single ledger line
#[derive(Debug, Clone, PartialEq)]
pub struct LeafEntry {
    name: String,
    value: Money,
    date: Option<NaiveDate>,
    id: Option<String>,
}

impl LeafEntry {
    /// Create an undated entry without identifier
    pub fn new(name: impl Into<String>, value: Money) -> Self {
        Self {
            name: name.into().to_lowercase(),
            value,
            date: None,
            id: None,
        }
    }

    /// Set the entry date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the entry identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Entry name (lowercase)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry value
    pub fn value(&self) -> Money {
        self.value
    }

    /// Entry date, if any
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Entry identifier, if any
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Render the entry as one fixed-width line
    pub fn render(&self, options: &RenderOptions) -> String {
        let widths = options.widths();
        let date = self
            .date
            .map(|d| d.format(options.date_format()).to_string())
            .unwrap_or_default();

        let mut line = format!(
            "{} {:>value_width$} {}",
            left_align(&title_case(&self.name), widths.name),
            self.value,
            right_align(&date, widths.date),
            value_width = widths.value,
        );

        if options.show_id() {
            line.push(' ');
            line.push_str(&right_align(self.id().unwrap_or_default(), widths.id));
        }

        line
    }

    /// Compare two entries by the given key
    pub fn compare_by(&self, other: &Self, key: EntrySortKey) -> Ordering {
        match key {
            EntrySortKey::Name => self.name.cmp(&other.name),
            EntrySortKey::Value => self.value.cmp(&other.value),
            EntrySortKey::Date => self.date.cmp(&other.date),
            EntrySortKey::Id => compare_ids(self.id(), other.id()),
        }
    }
}

impl TryFrom<Record> for LeafEntry {
    type Error = ReportError;

    /// Build an entry from a raw record. The record's `category` is ignored;
    /// placing the entry is up to the caller.
    fn try_from(record: Record) -> ReportResult<Self> {
        let Some(name) = record.name.as_deref() else {
            return Err(ReportError::missing_field("name", &record));
        };
        let Some(value) = record.value else {
            return Err(ReportError::missing_field("value", &record));
        };

        let mut entry = LeafEntry::new(name, Money::from_decimal(value)?);

        if let Some(date) = record.date.as_deref().filter(|d| !d.is_empty()) {
            let parsed = NaiveDate::parse_from_str(date, RECORD_DATE_FORMAT).map_err(|e| {
                ReportError::InvalidDate {
                    value: date.to_string(),
                    reason: e.to_string(),
                }
            })?;
            entry = entry.with_date(parsed);
        }

        entry.id = record.id;
        Ok(entry)
    }
}

impl fmt::Display for LeafEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

/// A named group of leaf entries with a running total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    name: String,
    value: Money,
    entries: Vec<LeafEntry>,
}

impl CategoryEntry {
    /// Create an empty category; the name is stored lowercase
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            value: Money::zero(),
            entries: Vec::new(),
        }
    }

    /// Category name (lowercase)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of all child entry values
    pub fn value(&self) -> Money {
        self.value
    }

    /// Child entries in insertion order
    pub fn entries(&self) -> &[LeafEntry] {
        &self.entries
    }

    /// Append a child entry and add its value to the category total
    ///
    /// # Errors
    ///
    /// Fails with [`ReportError::Overflow`] when the total leaves the
    /// representable range; the category is left unchanged.
    pub fn append(&mut self, entry: LeafEntry) -> ReportResult<()> {
        self.value = self.value.checked_add(entry.value())?;
        self.entries.push(entry);
        Ok(())
    }

    /// Render the category line followed by its indented entry lines, ordered
    /// by `entry_sort`
    pub fn render(&self, entry_sort: EntrySortKey, options: &RenderOptions) -> String {
        let mut sorted: Vec<&LeafEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.compare_by(b, entry_sort));

        let indent = " ".repeat(INDENT);
        let mut lines = vec![Self::summary_line(&self.name, self.value, options)];
        lines.extend(
            sorted
                .into_iter()
                .map(|entry| format!("{}{}", indent, entry.render(options))),
        );
        lines.join("\n")
    }

    /// A category-style line for an arbitrary name and amount, as used for
    /// category headers and report totals
    pub fn summary_line(name: &str, value: Money, options: &RenderOptions) -> String {
        let widths = options.widths();
        let mut line = format!(
            "{} {:>value_width$} {}",
            left_align(&title_case(name), widths.category_name()),
            value,
            " ".repeat(widths.date),
            value_width = widths.value,
        );
        if options.show_id() {
            line.push(' ');
            line.push_str(&" ".repeat(widths.id));
        }
        line
    }
}

impl fmt::Display for CategoryEntry {
    /// The category line alone, rendered with default options
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::summary_line(
            &self.name,
            self.value,
            &RenderOptions::default(),
        ))
    }
}

/// Anything that can be added to a listing
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A category, possibly already holding entries
    Category(CategoryEntry),
    /// A single ledger line
    Leaf(LeafEntry),
}

impl From<CategoryEntry> for Entry {
    fn from(entry: CategoryEntry) -> Self {
        Self::Category(entry)
    }
}

impl From<LeafEntry> for Entry {
    fn from(entry: LeafEntry) -> Self {
        Self::Leaf(entry)
    }
}

/// Numeric identifiers compare as numbers, anything else lexically.
/// Entries without identifier sort first.
fn compare_ids(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            _ => a.cmp(b),
        },
        (a, b) => a.cmp(&b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, RECORD_DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_leaf_from_record() {
        let record = Record::new("Groceries", 123.45).with_date("2016-08-10");
        let entry = LeafEntry::try_from(record).unwrap();
        assert_eq!(entry.name(), "groceries");
        assert_eq!(entry.value(), Money::from_cents(12345));
        assert_eq!(entry.date(), Some(date("2016-08-10")));
        assert_eq!(entry.id(), None);
    }

    #[test]
    fn test_leaf_from_record_ignores_category() {
        let record = Record::new("beer", -3.0).with_category("Drinks").with_id("4");
        let entry = LeafEntry::try_from(record).unwrap();
        assert_eq!(entry.id(), Some("4"));
        assert_eq!(entry.to_string(), "Beer                -3.00           ");
    }

    #[test]
    fn test_leaf_missing_fields() {
        let no_name = Record {
            value: Some(1.0),
            ..Default::default()
        };
        let err = LeafEntry::try_from(no_name).unwrap_err();
        assert!(matches!(err, ReportError::MissingField { field: "name", .. }));

        let no_value = Record {
            name: Some("lunch".into()),
            ..Default::default()
        };
        let err = LeafEntry::try_from(no_value).unwrap_err();
        assert!(matches!(err, ReportError::MissingField { field: "value", .. }));
    }

    #[test]
    fn test_leaf_invalid_date() {
        let record = Record::new("lunch", -8.0).with_date("2019-02-30");
        let err = LeafEntry::try_from(record).unwrap_err();
        assert!(matches!(err, ReportError::InvalidDate { .. }));
    }

    #[test]
    fn test_leaf_display() {
        let entry = LeafEntry::new("dinner for one", Money::from_decimal(99.9).unwrap())
            .with_date(date("2016-12-31"));
        assert_eq!(entry.to_string(), "Dinner For One      99.90 2016-12-31");
    }

    #[test]
    fn test_leaf_render_with_id_and_format() {
        let options = RenderOptions::default()
            .with_show_id(true)
            .with_date_format("%d.%m.%Y")
            .unwrap();
        let entry = LeafEntry::new("rent", Money::from_cents(-80000))
            .with_date(date("2019-01-01"))
            .with_id("12");
        assert_eq!(
            entry.render(&options),
            "Rent              -800.00 01.01.2019     12"
        );
    }

    #[test]
    fn test_category_display_empty() {
        let entry = CategoryEntry::new("Gifts");
        assert_eq!(entry.name(), "gifts");
        assert_eq!(entry.value(), Money::zero());
        assert_eq!(
            entry.to_string(),
            format!("Gifts{}    0.00{}", " ".repeat(14), " ".repeat(11))
        );
    }

    #[test]
    fn test_category_running_total() {
        let mut category = CategoryEntry::new("food");
        category.append(LeafEntry::new("bread", Money::from_cents(-250))).unwrap();
        assert_eq!(category.value(), Money::from_cents(-250));
        category.append(LeafEntry::new("refund", Money::from_cents(100))).unwrap();
        assert_eq!(category.value(), Money::from_cents(-150));
        assert_eq!(category.entries().len(), 2);
    }

    #[test]
    fn test_leaf_rejects_non_finite_value() {
        let record = Record::new("jackpot", f64::NAN);
        let err = LeafEntry::try_from(record).unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn test_category_append_overflow_keeps_total() {
        let mut category = CategoryEntry::new("big");
        category
            .append(LeafEntry::new("a", Money::from_cents(i64::MAX - 10)))
            .unwrap();
        let err = category
            .append(LeafEntry::new("b", Money::from_cents(11)))
            .unwrap_err();
        assert!(matches!(err, ReportError::Overflow(_)));
        assert_eq!(category.value(), Money::from_cents(i64::MAX - 10));
        assert_eq!(category.entries().len(), 1);
    }

    #[test]
    fn test_category_render_sorted_by_value() {
        let mut category = CategoryEntry::new("food");
        category.append(LeafEntry::new("bread", Money::from_cents(-250))).unwrap();
        category.append(LeafEntry::new("cheese", Money::from_cents(-900))).unwrap();

        let rendered = category.render(EntrySortKey::Value, &RenderOptions::default());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Food "));
        assert!(lines[0].contains("  -11.50"));
        assert!(lines[1].starts_with("  Cheese"));
        assert!(lines[2].starts_with("  Bread"));

        // Insertion order is untouched by rendering
        assert_eq!(category.entries()[0].name(), "bread");
    }

    #[test]
    fn test_category_render_stable_on_ties() {
        let mut category = CategoryEntry::new("fun");
        category.append(LeafEntry::new("zoo", Money::from_cents(-500))).unwrap();
        category.append(LeafEntry::new("arcade", Money::from_cents(-500))).unwrap();

        let rendered = category.render(EntrySortKey::Value, &RenderOptions::default());
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[1].starts_with("  Zoo"));
        assert!(lines[2].starts_with("  Arcade"));
    }

    #[test]
    fn test_sort_by_date_puts_undated_first() {
        let dated = LeafEntry::new("a", Money::zero()).with_date(date("2020-01-01"));
        let undated = LeafEntry::new("b", Money::zero());
        assert_eq!(undated.compare_by(&dated, EntrySortKey::Date), Ordering::Less);
    }

    #[test]
    fn test_compare_ids_numeric() {
        assert_eq!(compare_ids(Some("9"), Some("10")), Ordering::Less);
        assert_eq!(compare_ids(Some("b"), Some("a")), Ordering::Greater);
        assert_eq!(compare_ids(None, Some("1")), Ordering::Less);
    }

    #[test]
    fn test_entry_from_variants() {
        let entry: Entry = CategoryEntry::new("x").into();
        assert!(matches!(entry, Entry::Category(_)));
        let entry: Entry = LeafEntry::new("y", Money::zero()).into();
        assert!(matches!(entry, Entry::Leaf(_)));
    }
}
