//! Cell-width aware truncation and padding.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
}

/// Truncates `s` to `width` terminal cells, adding an ellipsis if needed.
pub(crate) fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
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
    out.push('…');
    out
}

/// Truncates and pads `s` to exactly `width` cells.
///
/// One cell of right padding separates columns, so the content gets
/// `width - 1` cells when the column is wider than a single cell.
pub(crate) fn fit(s: &str, width: usize, align: Align) -> String {
    if width == 0 {
        return String::new();
    }
    let content_width = if width > 1 { width - 1 } else { width };
    let truncated = truncate(s, content_width);
    let pad = content_width.saturating_sub(truncated.width());
    let gap = width - content_width;
    match align {
        Align::Left => format!("{truncated}{}", " ".repeat(pad + gap)),
        Align::Right => format!("{}{truncated}{}", " ".repeat(pad), " ".repeat(gap)),
    }
}

/// Pads a split cell so the plain text (`before`, `content`, `after`) would be
/// exactly `width` cells, with `content` painted separately by the caller.
pub(crate) fn split_fit(s: &str, width: usize, align: Align) -> (String, String, String) {
    if width == 0 {
        return (String::new(), String::new(), String::new());
    }
    let content_width = if width > 1 { width - 1 } else { width };
    let truncated = truncate(s, content_width);
    let pad = " ".repeat(content_width.saturating_sub(truncated.width()));
    let gap = " ".repeat(width - content_width);
    match align {
        Align::Left => (String::new(), truncated, format!("{pad}{gap}")),
        Align::Right => (pad, truncated, gap),
    }
}
