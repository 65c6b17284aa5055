//! Header presentation adapter.
//!
//! The header checkbox is an "any selected" indicator: it shows checked as
//! soon as one job set is selected, even when others are not. Clicking it
//! clears everything when something is selected and selects everything
//! otherwise. It is never tri-state.

use tracing::debug;

use crate::intents::SelectionIntents;
use crate::model::SelectedJobSets;
use crate::row::{CHECKED, UNCHECKED};

/// Aggregate selection state shown in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxHeader {
    checked: bool,
    disabled: bool,
}

impl CheckboxHeader {
    /// Summarizes `selected` against a list of `job_set_count` rows.
    #[must_use]
    pub fn new(selected: &SelectedJobSets, job_set_count: usize) -> Self {
        let any_selected = !selected.is_empty();
        Self {
            checked: any_selected,
            disabled: !any_selected && job_set_count == 0,
        }
    }

    /// Whether any job set is selected.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether there is nothing to select and nothing to clear.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Handles a click on the header checkbox.
    ///
    /// Emits `deselect_all` when checked and `select_all` otherwise. A
    /// disabled checkbox is the one exception: it ignores the click, so the
    /// choice is not exhaustive over checked and unchecked.
    ///
    /// Returns `true` if an intent was emitted.
    pub fn click<S>(&self, selection: &mut S) -> bool
    where
        S: SelectionIntents + ?Sized,
    {
        if self.disabled {
            return false;
        }
        if self.checked {
            debug!("header checkbox: deselect all");
            selection.deselect_all();
        } else {
            debug!("header checkbox: select all");
            selection.select_all();
        }
        true
    }

    /// The checkbox glyph for the header.
    #[must_use]
    pub const fn checkbox(&self) -> &'static str {
        if self.checked { CHECKED } else { UNCHECKED }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intents::Intent;
    use crate::model::JobSet;

    #[test]
    fn empty_selection_and_list_is_disabled() {
        let header = CheckboxHeader::new(&SelectedJobSets::new(), 0);
        assert!(!header.is_checked());
        assert!(header.is_disabled());

        let mut intents: Vec<Intent> = Vec::new();
        assert!(!header.click(&mut intents));
        assert!(intents.is_empty());
    }

    #[test]
    fn partial_selection_shows_checked() {
        let selected: SelectedJobSets = [JobSet::new("a", "t")].into_iter().collect();
        let header = CheckboxHeader::new(&selected, 10);
        assert!(header.is_checked());
        assert!(!header.is_disabled());
        assert_eq!(header.checkbox(), "[x]");
    }

    #[test]
    fn click_toggles_between_select_and_clear() {
        let mut intents: Vec<Intent> = Vec::new();

        CheckboxHeader::new(&SelectedJobSets::new(), 4).click(&mut intents);
        let selected: SelectedJobSets = [JobSet::new("a", "t")].into_iter().collect();
        CheckboxHeader::new(&selected, 4).click(&mut intents);

        assert_eq!(intents, vec![Intent::SelectAll, Intent::DeselectAll]);
    }

    #[test]
    fn stale_selection_with_empty_list_still_clears() {
        // The owner may hold a selection while the list is momentarily empty.
        let selected: SelectedJobSets = [JobSet::new("gone", "t")].into_iter().collect();
        let header = CheckboxHeader::new(&selected, 0);
        assert!(!header.is_disabled());

        let mut intents: Vec<Intent> = Vec::new();
        assert!(header.click(&mut intents));
        assert_eq!(intents, vec![Intent::DeselectAll]);
    }
}
