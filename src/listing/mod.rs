//! Listing Formatter
//!
//! Renders categorized operation names as column-aligned text. Categories
//! appear in priority order; names within a category are deduplicated,
//! sorted and filled down each column before moving to the next column.

mod layout;

pub use layout::display_width;

use std::collections::BTreeSet;

use crate::types::CategoryGroup;

/// Default output width in terminal cells
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Smallest gap between columns
pub const MIN_PADDING: usize = 4;

/// Layout limits for a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOptions {
    pub max_width: usize,
    pub padding: usize,
}

impl ListingOptions {
    /// Padding below `MIN_PADDING` is raised to it
    pub fn new(max_width: usize, padding: usize) -> Self {
        Self {
            max_width: max_width.max(1),
            padding: padding.max(MIN_PADDING),
        }
    }
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDTH, MIN_PADDING)
    }
}

/// Lay out one category's names as grid rows.
///
/// Names wider than `max_width` get a row of their own; the names around
/// them are laid out as separate grids so sorted order is kept.
pub fn format_columns<S: AsRef<str>>(names: &[S], options: &ListingOptions) -> Vec<String> {
    let sorted: BTreeSet<&str> = names.iter().map(|name| name.as_ref()).collect();

    let mut rows = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    for name in sorted {
        if display_width(name) > options.max_width {
            rows.extend(layout::grid_rows(&run, options.max_width, options.padding));
            run.clear();
            rows.push(name.to_string());
        } else {
            run.push(name);
        }
    }
    rows.extend(layout::grid_rows(&run, options.max_width, options.padding));
    rows
}

/// Render every non-empty category: a header line, then its grid rows.
/// Sections are separated by one blank line. An empty group renders as "".
pub fn format_listing(group: &CategoryGroup, options: &ListingOptions) -> String {
    let mut out = String::new();
    for (category, names) in group.iter() {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let rows = format_columns(&names, options);
        if rows.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(category.label());
        out.push('\n');
        for row in rows {
            out.push_str(&row);
            out.push('\n');
        }
    }
    out
}
