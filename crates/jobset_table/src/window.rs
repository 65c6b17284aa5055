//! Windowing capability used to virtualize rows.
//!
//! The table only renders the rows a [`Windowing`] implementation reports as
//! visible. [`ScrollWindow`] is the stock implementation: a first-row offset
//! that the caller scrolls and the table reads.
//!
//! # Example
//!
//! ```rust
//! use jobset_table::{ScrollWindow, Windowing};
//!
//! let mut window = ScrollWindow::new();
//! window.scroll_down(5, 100, 10);
//! assert_eq!(window.visible_range(100, 1, 10), 5..15);
//! ```

use std::ops::Range;

/// Produces the visible row range for a viewport.
pub trait Windowing {
    /// Returns the rows that fit in `viewport_height` lines, given
    /// `row_count` rows of `row_height` lines each.
    ///
    /// The range never extends past `row_count`.
    fn visible_range(&self, row_count: usize, row_height: usize, viewport_height: usize)
    -> Range<usize>;
}

/// Number of whole rows that fit in a viewport.
#[must_use]
pub const fn rows_per_page(row_height: usize, viewport_height: usize) -> usize {
    viewport_height / if row_height == 0 { 1 } else { row_height }
}

/// Scroll-offset window.
///
/// The offset is clamped on read, so a list that shrinks under a scrolled
/// window still shows its last page instead of nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollWindow {
    /// First row of the window.
    offset: usize,
    /// Rows scrolled per mouse wheel tick.
    pub wheel_delta: usize,
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollWindow {
    /// Creates a window scrolled to the top.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            wheel_delta: 3,
        }
    }

    /// Returns the raw first-row offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    fn max_offset(row_count: usize, page: usize) -> usize {
        row_count.saturating_sub(page)
    }

    /// Sets the first visible row, clamped to the last full page.
    pub fn set_offset(&mut self, offset: usize, row_count: usize, page: usize) {
        self.offset = offset.min(Self::max_offset(row_count, page));
    }

    /// Scrolls down by `n` rows.
    pub fn scroll_down(&mut self, n: usize, row_count: usize, page: usize) {
        let current = self.offset.min(Self::max_offset(row_count, page));
        self.set_offset(current.saturating_add(n), row_count, page);
    }

    /// Scrolls up by `n` rows.
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scrolls to the first row.
    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    /// Scrolls to the last full page.
    pub fn goto_bottom(&mut self, row_count: usize, page: usize) {
        self.offset = Self::max_offset(row_count, page);
    }

    /// Scrolls the minimum amount needed for `row` to be visible.
    pub fn scroll_to(&mut self, row: usize, row_count: usize, page: usize) {
        if page == 0 || row_count == 0 {
            self.offset = 0;
            return;
        }
        let row = row.min(row_count - 1);
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + page {
            self.offset = row + 1 - page;
        }
        self.set_offset(self.offset, row_count, page);
    }
}

impl Windowing for ScrollWindow {
    fn visible_range(
        &self,
        row_count: usize,
        row_height: usize,
        viewport_height: usize,
    ) -> Range<usize> {
        let page = rows_per_page(row_height, viewport_height);
        let start = self.offset.min(Self::max_offset(row_count, page));
        let end = (start + page).min(row_count);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_window_starts_at_top() {
        let window = ScrollWindow::new();
        assert_eq!(window.visible_range(50, 1, 10), 0..10);
        assert_eq!(window.visible_range(3, 1, 10), 0..3);
        assert_eq!(window.visible_range(0, 1, 10), 0..0);
    }

    #[test]
    fn tall_rows_fit_fewer_per_page() {
        let window = ScrollWindow::new();
        assert_eq!(window.visible_range(50, 2, 10), 0..5);
        assert_eq!(window.visible_range(50, 3, 10), 0..3);
        // Zero row height is treated as one line.
        assert_eq!(window.visible_range(50, 0, 4), 0..4);
    }

    #[test]
    fn scrolling_clamps_to_last_page() {
        let mut window = ScrollWindow::new();
        window.scroll_down(100, 20, 5);
        assert_eq!(window.offset(), 15);
        assert_eq!(window.visible_range(20, 1, 5), 15..20);

        window.scroll_up(3);
        assert_eq!(window.visible_range(20, 1, 5), 12..17);

        window.goto_top();
        assert_eq!(window.offset(), 0);

        window.goto_bottom(20, 5);
        assert_eq!(window.offset(), 15);
    }

    #[test]
    fn shrinking_list_keeps_last_page_visible() {
        let mut window = ScrollWindow::new();
        window.set_offset(40, 50, 10);
        assert_eq!(window.visible_range(12, 1, 10), 2..12);
    }

    #[test]
    fn scroll_to_moves_minimally() {
        let mut window = ScrollWindow::new();
        window.scroll_to(3, 100, 10);
        assert_eq!(window.offset(), 0);

        window.scroll_to(14, 100, 10);
        assert_eq!(window.offset(), 5);
        assert!(window.visible_range(100, 1, 10).contains(&14));

        window.scroll_to(2, 100, 10);
        assert_eq!(window.offset(), 2);

        window.scroll_to(500, 100, 10);
        assert_eq!(window.offset(), 90);
    }
}
