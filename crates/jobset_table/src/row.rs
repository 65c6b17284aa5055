//! Row presentation adapter.
//!
//! Wraps one job set row with a selection checkbox. The checked state is a
//! membership test against the selection the owner passed in; toggling only
//! forwards an intent with the row index and the desired end state. Range
//! computation for shift-selection belongs to the owner.

use tracing::debug;

use crate::intents::SelectionIntents;
use crate::model::{JobSet, SelectedJobSets};

/// Glyph for a checked checkbox.
pub const CHECKED: &str = "[x]";
/// Glyph for an unchecked checkbox.
pub const UNCHECKED: &str = "[ ]";

/// A row of the table together with its checkbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxRow<'a> {
    index: usize,
    job_set: &'a JobSet,
    checked: bool,
}

impl<'a> CheckboxRow<'a> {
    /// Projects the selection onto the row at `index`.
    #[must_use]
    pub fn new(index: usize, job_set: &'a JobSet, selected: &SelectedJobSets) -> Self {
        Self {
            index,
            job_set,
            checked: selected.contains(&job_set.job_set_id),
        }
    }

    /// Index of the row in the current ordering.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The job set shown in this row.
    #[must_use]
    pub const fn job_set(&self) -> &'a JobSet {
        self.job_set
    }

    /// Whether the row's checkbox is checked.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Requests that exactly this row become `selected`.
    pub fn on_change_checked<S>(&self, selected: bool, selection: &mut S)
    where
        S: SelectionIntents + ?Sized,
    {
        debug!(index = self.index, selected, "row checkbox changed");
        selection.select_job_set(self.index, selected);
    }

    /// Requests a range change ending at this row.
    pub fn on_change_checked_shift<S>(&self, selected: bool, selection: &mut S)
    where
        S: SelectionIntents + ?Sized,
    {
        debug!(index = self.index, selected, "row checkbox shift-changed");
        selection.shift_select_job_set(self.index, selected);
    }

    /// Handles a click on the checkbox: requests the opposite of the current
    /// state, as a range change when `shift` is held.
    pub fn toggle<S>(&self, shift: bool, selection: &mut S)
    where
        S: SelectionIntents + ?Sized,
    {
        let selected = !self.checked;
        if shift {
            self.on_change_checked_shift(selected, selection);
        } else {
            self.on_change_checked(selected, selection);
        }
    }

    /// The checkbox glyph for this row.
    #[must_use]
    pub const fn checkbox(&self) -> &'static str {
        if self.checked { CHECKED } else { UNCHECKED }
    }
}
