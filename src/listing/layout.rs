//! Column-major grid layout

use unicode_width::UnicodeWidthStr;

/// Terminal cells taken by a name. Wide (East Asian) characters take two
/// cells, combining marks none.
pub fn display_width(name: &str) -> usize {
    UnicodeWidthStr::width(name)
}

/// Chosen grid shape: `rows` rows, one width per occupied column
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Grid {
    pub rows: usize,
    pub col_widths: Vec<usize>,
}

/// Find the widest grid whose rows fit in `max_width`.
///
/// Trials run from `n` columns down. Each trial recomputes the row count
/// and then the number of columns actually occupied, since filling down
/// columns can leave trailing columns empty. Column widths are measured
/// per trial because column membership changes with the row count.
pub(crate) fn fit_grid(widths: &[usize], max_width: usize, padding: usize) -> Grid {
    let n = widths.len();
    for cols in (1..=n).rev() {
        let rows = (n + cols - 1) / cols;
        let used = (n + rows - 1) / rows;
        let col_widths: Vec<usize> = (0..used)
            .map(|c| {
                let end = ((c + 1) * rows).min(n);
                widths[c * rows..end].iter().copied().max().unwrap_or(0)
            })
            .collect();
        let total = col_widths
            .iter()
            .fold(padding.saturating_mul(used - 1), |acc, w| acc.saturating_add(*w));
        if total <= max_width {
            return Grid { rows, col_widths };
        }
    }

    Grid {
        rows: n,
        col_widths: vec![widths.iter().copied().max().unwrap_or(0)],
    }
}

/// Lay `names` out column-major: names fill down each column before moving
/// to the next one. Rows carry no trailing whitespace.
pub(crate) fn grid_rows(names: &[&str], max_width: usize, padding: usize) -> Vec<String> {
    if names.is_empty() {
        return Vec::new();
    }

    let widths: Vec<usize> = names.iter().map(|name| display_width(name)).collect();
    let grid = fit_grid(&widths, max_width, padding);
    let n = names.len();

    (0..grid.rows)
        .map(|r| {
            let mut line = String::new();
            for (c, col_width) in grid.col_widths.iter().enumerate() {
                let idx = c * grid.rows + r;
                if idx >= n {
                    break;
                }
                line.push_str(names[idx]);
                let has_next = idx + grid.rows < n;
                if has_next {
                    let gap = col_width.saturating_add(padding) - widths[idx];
                    line.extend(std::iter::repeat(' ').take(gap));
                }
            }
            line
        })
        .collect()
}
