//! Sortable header cell for the submission-time column.
//!
//! The cell mirrors the direction it is given and asks for the opposite one
//! when activated. It never reorders anything itself.

use tracing::debug;

use crate::intents::NavigationIntents;
use crate::style::{Styles, paint};
use crate::text::{Align, fit};

/// Arrow shown for newest-first order.
pub const DESCENDING_ARROW: &str = "▼";
/// Arrow shown for oldest-first order.
pub const ASCENDING_ARROW: &str = "▲";

/// Header cell that toggles the sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortableHeaderCell {
    name: &'static str,
    descending: bool,
}

impl SortableHeaderCell {
    /// Creates the cell for `name`, showing `descending` order.
    #[must_use]
    pub const fn new(name: &'static str, descending: bool) -> Self {
        Self { name, descending }
    }

    /// Whether the cell currently shows newest-first order.
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        self.descending
    }

    /// Requests the opposite direction.
    pub fn activate<N>(&self, navigation: &mut N)
    where
        N: NavigationIntents + ?Sized,
    {
        let newest_first = !self.descending;
        debug!(newest_first, "sort direction change requested");
        navigation.change_order(newest_first);
    }

    /// Label with the direction arrow.
    #[must_use]
    pub fn label(&self) -> String {
        let arrow = if self.descending {
            DESCENDING_ARROW
        } else {
            ASCENDING_ARROW
        };
        format!("{} {arrow}", self.name)
    }

    /// Renders the cell to exactly `width` cells.
    #[must_use]
    pub fn view(&self, width: usize, styles: &Styles) -> String {
        paint(styles.header, &fit(&self.label(), width, Align::Left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intents::Intent;

    #[test]
    fn label_mirrors_direction() {
        assert_eq!(
            SortableHeaderCell::new("Submission Time", true).label(),
            "Submission Time ▼"
        );
        assert_eq!(
            SortableHeaderCell::new("Submission Time", false).label(),
            "Submission Time ▲"
        );
    }

    #[test]
    fn activate_requests_opposite_direction() {
        let mut intents: Vec<Intent> = Vec::new();
        SortableHeaderCell::new("Submission Time", true).activate(&mut intents);
        SortableHeaderCell::new("Submission Time", false).activate(&mut intents);
        assert_eq!(
            intents,
            vec![
                Intent::ChangeOrder {
                    newest_first: false
                },
                Intent::ChangeOrder { newest_first: true },
            ]
        );
    }
}
