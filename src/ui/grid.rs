//! Turn a [`Layout`] into printable rows.

use std::io::{self, Write};

use crate::core::entry::Entry;
use crate::core::layout::Layout;

/// Render every row of the grid.
///
/// Each entry is followed by `width - visible + padding` spaces (at least one)
/// unless it is the last entry on its row.
pub fn render_rows(entries: &[Entry], layout: &Layout) -> Vec<String> {
    let len = entries.len();
    (0..layout.rows)
        .map(|row| {
            let mut line = String::new();
            for col in 0..layout.columns {
                let Some(idx) = layout.index(row, col, len) else {
                    break;
                };
                let entry = &entries[idx];
                line.push_str(entry.display());

                if layout.index(row, col + 1, len).is_some() {
                    let gap = (layout.widths[col] + layout.padding)
                        .saturating_sub(entry.visible_width())
                        .max(1);
                    line.extend(std::iter::repeat(' ').take(gap));
                }
            }
            line
        })
        .collect()
}

/// Write the grid to `out`, one line per row.
pub fn write_grid<W: Write>(out: &mut W, entries: &[Entry], layout: &Layout) -> io::Result<()> {
    for line in render_rows(entries, layout) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::{fit, DEFAULT_PADDING};

    fn entries(names: &[&str]) -> Vec<Entry> {
        names.iter().map(|n| Entry::new(*n)).collect()
    }

    #[test]
    fn zero_entries_render_nothing() {
        let layout = fit(&[], 80, DEFAULT_PADDING);
        let mut buf = Vec::new();
        write_grid(&mut buf, &[], &layout).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn rows_are_filled_column_major() {
        let e = entries(&["a", "b", "c", "d", "e"]);
        let layout = Layout::measure(&e, 2, 2);
        assert_eq!(render_rows(&e, &layout), vec!["a  d", "b  e", "c"]);
    }

    #[test]
    fn padding_uses_visible_width() {
        let e = entries(&["\x1b[34mlong\x1b[0m", "x", "y", "z"]);
        let layout = Layout::measure(&e, 2, 2);
        let rows = render_rows(&e, &layout);
        assert_eq!(rows[0], "\x1b[34mlong\x1b[0m  y");
        assert_eq!(rows[1], "x     z");
    }

    #[test]
    fn gap_is_never_below_one_space() {
        // A layout with zero padding and a mismeasured column still separates.
        let e = entries(&["abc", "d"]);
        let layout = Layout {
            columns: 2,
            rows: 1,
            widths: vec![1, 1],
            padding: 0,
        };
        assert_eq!(render_rows(&e, &layout), vec!["abc d"]);
    }

    #[test]
    fn every_entry_appears_once_in_order() {
        let names: Vec<String> = (0..23).map(|i| format!("f{i}")).collect();
        let e: Vec<Entry> = names.iter().map(|n| Entry::new(n.as_str())).collect();
        let layout = fit(&e, 30, DEFAULT_PADDING);
        let rows = render_rows(&e, &layout);

        let cells: Vec<Vec<&str>> = rows.iter().map(|r| r.split_whitespace().collect()).collect();
        let mut column_major = Vec::new();
        for col in 0..layout.columns {
            for row in &cells {
                if let Some(cell) = row.get(col) {
                    column_major.push(cell.to_string());
                }
            }
        }
        assert_eq!(column_major, names);
    }

    #[test]
    fn stripped_output_matches_visible_names() {
        let e = entries(&["\x1b[90m.a\x1b[0m", "b", "\x1b[38;2;70;150;150m.cdir/\x1b[0m"]);
        let layout = fit(&e, 20, DEFAULT_PADDING);
        let rows = render_rows(&e, &layout);
        let stripped: Vec<String> = rows
            .iter()
            .flat_map(|r| {
                console::strip_ansi_codes(r)
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        assert_eq!(stripped, vec![".a", "b", ".cdir/"]);
    }
}
