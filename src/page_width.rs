use crate::geometry::{Indent, Width};

/// The horizontal budget a layout must respect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageWidth {
    /// Each line may hold `line_width` columns, of which at most
    /// `ribbon_fraction * line_width` may be taken up by content (as
    /// opposed to indentation).
    AvailablePerLine {
        line_width: Width,
        ribbon_fraction: f64,
    },
    /// No width constraint at all.
    Unbounded,
}

impl PageWidth {
    /// A width-constrained page. The ribbon fraction is clamped to
    /// `[0, 1]`.
    pub fn available_per_line(line_width: Width, ribbon_fraction: f64) -> PageWidth {
        PageWidth::AvailablePerLine {
            line_width,
            ribbon_fraction: ribbon_fraction.clamp(0.0, 1.0),
        }
    }
}

impl Default for PageWidth {
    /// 80 columns, full ribbon.
    fn default() -> PageWidth {
        PageWidth::available_per_line(80, 1.0)
    }
}

/// The number of columns still usable on the current line, limited by both
/// the line length and the ribbon. Negative when the line is already over
/// budget.
pub fn remaining_width(
    line_length: Width,
    ribbon_fraction: f64,
    line_indent: Indent,
    current_column: Width,
) -> i64 {
    let columns_left_in_line = i64::from(line_length) - i64::from(current_column);
    let ribbon_width = ((f64::from(line_length) * ribbon_fraction).floor() as i64)
        .clamp(0, i64::from(line_length));
    let columns_left_in_ribbon =
        i64::from(line_indent) + ribbon_width - i64::from(current_column);
    columns_left_in_line.min(columns_left_in_ribbon)
}
