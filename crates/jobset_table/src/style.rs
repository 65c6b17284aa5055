//! Styles used when painting the table.

use crossterm::style::{Color, ContentStyle, Stylize};

/// Styles for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// Style for the header row.
    pub header: ContentStyle,
    /// Style for plain cells.
    pub cell: ContentStyle,
    /// Style applied to checked rows.
    pub selected: ContentStyle,
    /// Style for clickable state counts.
    pub link: ContentStyle,
    /// Style for a disabled header checkbox.
    pub disabled: ContentStyle,
    /// Style for the keyboard cursor cell, when a caller highlights one.
    pub cursor: ContentStyle,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: ContentStyle::new().bold(),
            cell: ContentStyle::new(),
            selected: ContentStyle::new().bold().with(Color::AnsiValue(212)),
            link: ContentStyle::new().underlined().with(Color::AnsiValue(39)),
            disabled: ContentStyle::new().dim(),
            cursor: ContentStyle::new().reverse(),
        }
    }
}

impl Styles {
    /// Styles that emit no escape sequences at all.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            header: ContentStyle::new(),
            cell: ContentStyle::new(),
            selected: ContentStyle::new(),
            link: ContentStyle::new(),
            disabled: ContentStyle::new(),
            cursor: ContentStyle::new(),
        }
    }
}

/// Paints `text` with `style`, leaving it untouched for the empty style.
#[must_use]
pub fn paint(style: ContentStyle, text: &str) -> String {
    if style == ContentStyle::new() {
        text.to_string()
    } else {
        style.apply(text).to_string()
    }
}
