//! Listing
//!
//! A listing holds entries in two levels: categories at the top, leaf entries
//! below them. It is built for one rendering pass and then dropped.

use tracing::debug;

use crate::display::{capitalize, center, left_align, RenderOptions};
use crate::error::ReportResult;
use crate::models::{CategoryEntry, CategorySortKey, Entry, EntrySortKey, LeafEntry, Money, Record};

/// Category used when neither a record nor the caller names one
pub const DEFAULT_CATEGORY: &str = "unspecified";

/// Name of a listing created without one
pub const DEFAULT_LISTING_NAME: &str = "Listing";

/// Categories of entries with running totals
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    name: String,
    categories: Vec<CategoryEntry>,
}

impl Default for Listing {
    fn default() -> Self {
        Self::new(DEFAULT_LISTING_NAME)
    }
}

impl Listing {
    /// Create an empty listing
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: Vec::new(),
        }
    }

    /// Build a listing from raw records
    ///
    /// Each record is placed in its own `category`, falling back to
    /// `default_category` and then to [`DEFAULT_CATEGORY`].
    ///
    /// # Errors
    ///
    /// Fails on the first record that lacks a name or value, carries an
    /// invalid date or an amount that does not fit, or pushes a category
    /// total out of range.
    pub fn from_records<I>(
        records: I,
        default_category: Option<&str>,
        name: Option<&str>,
    ) -> ReportResult<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut listing = Self::new(name.unwrap_or(DEFAULT_LISTING_NAME));

        for mut record in records {
            let category = record
                .category
                .take()
                .filter(|c| !c.is_empty())
                .or_else(|| default_category.map(str::to_string))
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

            let entry = LeafEntry::try_from(record)?;
            listing.add_entry(entry.into(), Some(category.as_str()))?;
        }

        debug!(
            listing = %listing.name,
            categories = listing.categories.len(),
            "built listing from records"
        );
        Ok(listing)
    }

    /// Listing name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    /// Add a category or a leaf entry
    ///
    /// A category is dropped when one with the same name (case-insensitive)
    /// already exists. A leaf entry goes into the category named
    /// `category_name` (or [`DEFAULT_CATEGORY`]), which is created on demand.
    ///
    /// # Errors
    ///
    /// Fails when the leaf's value overflows the category total.
    pub fn add_entry(&mut self, entry: Entry, category_name: Option<&str>) -> ReportResult<()> {
        match entry {
            Entry::Category(category) => {
                if self.find_category(category.name()).is_some() {
                    debug!(category = category.name(), "discarding duplicate category");
                } else {
                    self.categories.push(category);
                }
            }
            Entry::Leaf(leaf) => {
                let category = self.category_mut(category_name.unwrap_or(DEFAULT_CATEGORY));
                category.append(leaf)?;
            }
        }
        Ok(())
    }

    /// Render the whole listing: centered name, column header, and every
    /// category block ordered by `category_sort`
    pub fn prettify(
        &self,
        category_sort: CategorySortKey,
        entry_sort: EntrySortKey,
        options: &RenderOptions,
    ) -> String {
        let widths = options.widths();
        let mut lines = vec![center(&self.name, options.total_width())];

        let mut header = format!(
            "{} {} {}",
            left_align(&capitalize("name"), widths.category_name()),
            left_align(&capitalize("value"), widths.value),
            left_align(&capitalize("date"), widths.date),
        );
        if options.show_id() {
            header.push(' ');
            header.push_str(&left_align("ID", widths.id));
        }
        lines.push(header);

        let mut sorted: Vec<&CategoryEntry> = self.categories.iter().collect();
        match category_sort {
            CategorySortKey::Name => sorted.sort_by(|a, b| a.name().cmp(b.name())),
            CategorySortKey::Value => sorted.sort_by_key(|c| c.value()),
        }

        lines.extend(sorted.into_iter().map(|c| c.render(entry_sort, options)));
        lines.join("\n")
    }

    /// Category totals in insertion order
    pub fn category_values(&self) -> Vec<Money> {
        self.categories.iter().map(CategoryEntry::value).collect()
    }

    /// Category names in insertion order
    pub fn category_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Sum of all category totals
    ///
    /// # Errors
    ///
    /// Fails with [`ReportError::Overflow`](crate::error::ReportError::Overflow)
    /// when the sum leaves the representable range.
    pub fn total_value(&self) -> ReportResult<Money> {
        self.categories
            .iter()
            .try_fold(Money::zero(), |total, c| total.checked_add(c.value()))
    }

    fn find_category(&self, name: &str) -> Option<usize> {
        let name = name.to_lowercase();
        self.categories.iter().position(|c| c.name() == name)
    }

    fn category_mut(&mut self, name: &str) -> &mut CategoryEntry {
        let index = match self.find_category(name) {
            Some(index) => index,
            None => {
                self.categories.push(CategoryEntry::new(name));
                self.categories.len() - 1
            }
        };
        &mut self.categories[index]
    }
}
