//! Helper functions for UI rendering
//!
//! Width-aware truncation and the card-grid splitter shared by the screens.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shrink a rect by `margin` columns on each side
pub fn inner_rect_horizontal(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin.min(area.width / 2),
        width: area.width.saturating_sub(margin * 2),
        ..area
    }
}

/// Truncate to `max_width` display columns, ending in "..." when cut
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Split `area` into a grid of `count` cells, `columns` per row.
///
/// Rows that do not fit in the area's height are dropped.
pub fn grid_cells(area: Rect, columns: u16, count: usize, cell_height: u16) -> Vec<Rect> {
    let columns = columns.max(1) as usize;
    if count == 0 || cell_height == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(columns);
    let visible_rows = rows.min((area.height / cell_height) as usize);

    let row_areas = Layout::vertical(vec![Constraint::Length(cell_height); visible_rows])
        .split(Rect {
            height: (visible_rows as u16) * cell_height,
            ..area
        });

    let mut cells = Vec::with_capacity(count);
    for (row, row_area) in row_areas.iter().enumerate() {
        let cols = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .spacing(1)
            .split(*row_area);
        for (col, cell) in cols.iter().enumerate() {
            if row * columns + col < count {
                cells.push(*cell);
            }
        }
    }
    cells
}

/// Card height for `rows` rows of cards in `available` lines.
///
/// `preferred` when every row fits, otherwise shrunk evenly but never below
/// `min`; rows that still do not fit are left to `grid_cells` to drop.
pub fn fit_cell_height(available: u16, rows: u16, preferred: u16, min: u16) -> u16 {
    if rows == 0 || rows.saturating_mul(preferred) <= available {
        return preferred;
    }
    (available / rows).clamp(min, preferred)
}

/// Collapse lines into plain text, one per row. Used by render tests.
pub fn lines_to_string(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
