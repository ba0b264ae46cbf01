//! Column packing — choose how many columns a listing gets.
//!
//! Entries fill the grid column-major (down, then across), like `ls -C`.
//! The search walks candidate column counts from the widest plausible grid
//! down to one and keeps the first that fits.  Total width is not monotonic
//! in the column count (the row count moves in steps), so a linear scan is
//! the only way to guarantee the maximum.

use super::entry::Entry;

/// Default gap between columns.
pub const DEFAULT_PADDING: usize = 2;

/// A fully computed grid shape for a particular column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub columns: usize,
    pub rows: usize,
    /// Max visible width per column.
    pub widths: Vec<usize>,
    pub padding: usize,
}

impl Layout {
    /// Measure `entries` laid out in exactly `columns` columns.
    pub fn measure(entries: &[Entry], columns: usize, padding: usize) -> Self {
        let columns = columns.max(1);
        let rows = entries.len().div_ceil(columns);
        let widths = (0..columns)
            .map(|col| {
                (0..rows)
                    .map_while(|row| entries.get(col * rows + row))
                    .map(Entry::visible_width)
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        Self {
            columns,
            rows,
            widths,
            padding,
        }
    }

    /// Sum of column widths plus the gaps between them.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.padding * self.columns.saturating_sub(1)
    }

    /// Index of the entry at `(row, col)`, if the grid has one there.
    pub fn index(&self, row: usize, col: usize, len: usize) -> Option<usize> {
        let idx = col * self.rows + row;
        (row < self.rows && col < self.columns && idx < len).then_some(idx)
    }
}

/// Pick the layout with the most columns whose total width fits in
/// `term_width`.  Falls back to a single column when nothing fits.
pub fn fit(entries: &[Entry], term_width: usize, padding: usize) -> Layout {
    let max_columns = entries.len().min(term_width).max(1);

    for columns in (1..=max_columns).rev() {
        let layout = Layout::measure(entries, columns, padding);
        if layout.total_width() <= term_width {
            tracing::debug!(
                columns,
                rows = layout.rows,
                width = layout.total_width(),
                term_width,
                "layout chosen"
            );
            return layout;
        }
    }

    tracing::debug!(term_width, "no layout fits, using one column");
    Layout::measure(entries, 1, padding)
}
