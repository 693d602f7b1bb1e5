//! Balance Report
//!
//! Splits the records of a period into earnings and expenses and renders both
//! listings either stacked or side by side.

use tracing::debug;

use super::listing::Listing;
use super::options::{Layout, ReportOptions};
use crate::display::{rule, RenderOptions};
use crate::error::{ReportError, ReportResult};
use crate::models::{CategoryEntry, Record, RecordsContainer};

/// Separator between the earnings and expenses columns
pub const COLUMN_SEPARATOR: &str = " | ";

/// Rule between stacked listings
pub const STACKED_RULE: char = '-';

/// Rule above the totals row of the side-by-side layout
pub const TOTALS_RULE: char = '=';

/// Name of the synthetic category carrying each listing's total
pub const TOTAL_NAME: &str = "TOTAL";

/// Earnings and expenses listings of one period
#[derive(Debug, Clone)]
pub struct BalanceReport {
    /// Records with a positive value
    pub earnings: Listing,
    /// Records with a zero or negative value
    pub expenses: Listing,
}

impl BalanceReport {
    /// Build both listings from a records container
    ///
    /// Returns `Ok(None)` when the container holds no records.
    pub fn generate(
        container: &RecordsContainer,
        default_category: Option<&str>,
    ) -> ReportResult<Option<Self>> {
        if container.is_empty() {
            return Ok(None);
        }

        let (earnings, expenses) = classify(container.flatten())?;
        debug!(
            earnings = earnings.len(),
            expenses = expenses.len(),
            "classified records"
        );

        Ok(Some(Self {
            earnings: Listing::from_records(earnings, default_category, Some("Earnings"))?,
            expenses: Listing::from_records(expenses, default_category, Some("Expenses"))?,
        }))
    }

    /// Render with the given layout
    pub fn format(&self, options: &ReportOptions) -> ReportResult<String> {
        match options.layout {
            Layout::Stacked => Ok(self.format_stacked(options)),
            Layout::SideBySide => self.format_side_by_side(options),
        }
    }

    /// Earnings block, rule, expenses block; separated by blank lines
    pub fn format_stacked(&self, options: &ReportOptions) -> String {
        let render = &options.render;
        format!(
            "{}\n\n{}\n\n{}",
            self.prettify(&self.earnings, options),
            rule(STACKED_RULE, render.total_width()),
            self.prettify(&self.expenses, options),
        )
    }

    /// Both listings row by row, followed by a rule and the totals row
    ///
    /// # Errors
    ///
    /// Fails when a listing total overflows.
    pub fn format_side_by_side(&self, options: &ReportOptions) -> ReportResult<String> {
        let render = &options.render;
        let earnings = self.prettify(&self.earnings, options);
        let expenses = self.prettify(&self.expenses, options);

        let mut lines = merge_columns(
            &earnings.lines().collect::<Vec<_>>(),
            &expenses.lines().collect::<Vec<_>>(),
            render.total_width(),
        );

        lines.push(rule(
            TOTALS_RULE,
            2 * render.total_width() + COLUMN_SEPARATOR.len(),
        ));
        lines.push(format!(
            "{}{}{}",
            total_line(&self.earnings, render)?,
            COLUMN_SEPARATOR,
            total_line(&self.expenses, render)?,
        ));

        Ok(lines.join("\n"))
    }

    fn prettify(&self, listing: &Listing, options: &ReportOptions) -> String {
        listing.prettify(options.category_sort, options.entry_sort, &options.render)
    }
}

/// Render a records container as an earnings/expenses report
///
/// Returns an empty string when the container holds no records.
///
/// # Errors
///
/// Fails as a whole when any record lacks a name or value, carries an
/// invalid date or an amount that cannot be held, or when a total overflows.
pub fn render(container: &RecordsContainer, options: &ReportOptions) -> ReportResult<String> {
    match BalanceReport::generate(container, options.default_category.as_deref())? {
        Some(report) => report.format(options),
        None => Ok(String::new()),
    }
}

/// Split records by sign: strictly positive values are earnings, zero and
/// negative values are expenses
pub fn classify(records: Vec<Record>) -> ReportResult<(Vec<Record>, Vec<Record>)> {
    let mut earnings = Vec::new();
    let mut expenses = Vec::new();

    for record in records {
        let Some(value) = record.value else {
            return Err(ReportError::missing_field("value", &record));
        };
        if value > 0.0 {
            earnings.push(record);
        } else {
            expenses.push(record);
        }
    }

    Ok((earnings, expenses))
}

/// Join two columns of lines; the shorter side is padded so every row keeps
/// the separator in the same place
pub fn merge_columns(left: &[&str], right: &[&str], left_width: usize) -> Vec<String> {
    let rows = left.len().max(right.len());
    let blank = " ".repeat(left_width);

    (0..rows)
        .map(|i| match (left.get(i), right.get(i)) {
            (Some(l), Some(r)) => format!("{}{}{}", l, COLUMN_SEPARATOR, r),
            (Some(l), None) => format!("{}{}", l, COLUMN_SEPARATOR),
            (None, r) => format!(
                "{}{}{}",
                blank,
                COLUMN_SEPARATOR,
                r.copied().unwrap_or_default()
            ),
        })
        .collect()
}

fn total_line(listing: &Listing, options: &RenderOptions) -> ReportResult<String> {
    Ok(CategoryEntry::summary_line(
        TOTAL_NAME,
        listing.total_value()?,
        options,
    ))
}
