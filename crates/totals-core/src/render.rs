//! # Text Rendering
//!
//! Lays a [`TotalsBreakdown`] out as a fixed-width text block, the way a
//! receipt or a terminal would show it.
//!
//! ## Layout (width 32)
//! ```text
//! Subtotal                  $10.00
//! Discount                 - $2.00
//! Shipping                   $0.00
//! Taxes                      $0.80
//! ────────────────────────────────
//! TOTAL                      $8.80
//! ────────────────────────────────
//! ```
//! Hidden rows are skipped. The total is set apart by a divider above and
//! below and an upper-cased label.

use crate::presenter::{DisplayRow, Emphasis, TotalsBreakdown};

/// Narrowest block `render_text` is designed for.
pub const MIN_WIDTH: usize = 20;

/// Widest block `render_text` is designed for.
pub const MAX_WIDTH: usize = 120;

/// Default block width.
pub const DEFAULT_WIDTH: usize = 40;

const DIVIDER: char = '─';

/// Renders the visible rows of `breakdown` into `width` columns.
///
/// Lines longer than `width` (a long label next to a long amount) are not
/// truncated; the label and amount are separated by a single space instead.
pub fn render_text(breakdown: &TotalsBreakdown, width: usize) -> String {
    let mut out = String::new();
    let divider: String = std::iter::repeat(DIVIDER).take(width).collect();

    for row in breakdown.visible_rows() {
        match row.emphasis {
            Emphasis::Regular => push_line(&mut out, &row_line(row, &row.label, width)),
            Emphasis::Total => {
                push_line(&mut out, &divider);
                push_line(&mut out, &row_line(row, &row.label.to_uppercase(), width));
                push_line(&mut out, &divider);
            }
        }
    }

    out
}

fn row_line(row: &DisplayRow, label: &str, width: usize) -> String {
    let used = label.chars().count() + row.formatted.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{label}{}{}", " ".repeat(gap), row.formatted)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

// =============================================================================
// Unit Tests
// =============================================================================
