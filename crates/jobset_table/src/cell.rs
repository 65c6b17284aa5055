//! State-cell click router.
//!
//! Each of the five count columns renders through a [`StateCell`]. A cell is
//! a link only when its job set has a non-zero count for that state.
//! Activating a link emits [`NavigationIntents::open_job_set`] with the row's
//! job set id and the column's state; activating a plain cell does nothing.

use tracing::debug;

use crate::intents::NavigationIntents;
use crate::model::{JobSet, JobState};
use crate::style::{Styles, paint};
use crate::text::{Align, split_fit};

/// Whether a count opens navigation: present and non-zero.
///
/// Absent and zero counts are treated the same. Negative counts
/// are upstream data errors, rendered and routed as-is.
#[must_use]
pub const fn has_count(count: Option<i64>) -> bool {
    matches!(count, Some(n) if n != 0)
}

/// One count cell of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCell<'a> {
    job_set: &'a JobSet,
    state: JobState,
}

impl<'a> StateCell<'a> {
    /// Creates the cell showing `state` for `job_set`.
    #[must_use]
    pub const fn new(job_set: &'a JobSet, state: JobState) -> Self {
        Self { job_set, state }
    }

    /// The state this cell counts.
    #[must_use]
    pub const fn state(&self) -> JobState {
        self.state
    }

    /// The count shown in this cell.
    #[must_use]
    pub const fn count(&self) -> Option<i64> {
        self.job_set.count(self.state)
    }

    /// Whether the cell renders as a clickable link.
    #[must_use]
    pub const fn is_link(&self) -> bool {
        has_count(self.count())
    }

    /// Activates the cell.
    ///
    /// Returns `true` if an intent was emitted.
    pub fn activate<N>(&self, navigation: &mut N) -> bool
    where
        N: NavigationIntents + ?Sized,
    {
        if !self.is_link() {
            return false;
        }
        debug!(
            job_set = %self.job_set.job_set_id,
            state = %self.state,
            "state cell activated"
        );
        navigation.open_job_set(&self.job_set.job_set_id, self.state);
        true
    }

    /// Renders the cell to exactly `width` cells.
    ///
    /// Links are painted with the link style; only the digits are painted so
    /// the padding stays unstyled.
    #[must_use]
    pub fn view(&self, width: usize, styles: &Styles) -> String {
        let text = self.count().map(|n| n.to_string()).unwrap_or_default();
        let (before, content, after) = split_fit(&text, width, Align::Right);
        let style = if self.is_link() {
            styles.link
        } else {
            styles.cell
        };
        format!("{before}{}{after}", paint(style, &content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intents::Intent;

    #[test]
    fn zero_and_absent_counts_are_plain() {
        assert!(!has_count(None));
        assert!(!has_count(Some(0)));
        assert!(has_count(Some(1)));
        assert!(has_count(Some(-2)));
    }

    #[test]
    fn link_cell_emits_job_set_and_state() {
        let js = JobSet::new("a", "t").with_failed(2);
        let cell = StateCell::new(&js, JobState::Failed);
        let mut intents: Vec<Intent> = Vec::new();

        assert!(cell.is_link());
        assert!(cell.activate(&mut intents));
        assert_eq!(
            intents,
            vec![Intent::OpenJobSet {
                job_set_id: "a".into(),
                state: JobState::Failed
            }]
        );
    }

    #[test]
    fn plain_cell_emits_nothing() {
        let js = JobSet::new("a", "t").with_queued(0);
        let mut intents: Vec<Intent> = Vec::new();

        assert!(!StateCell::new(&js, JobState::Queued).activate(&mut intents));
        assert!(!StateCell::new(&js, JobState::Running).activate(&mut intents));
        assert!(intents.is_empty());
    }

    #[test]
    fn view_right_aligns_counts() {
        let js = JobSet::new("a", "t").with_running(42);
        let styles = Styles::plain();
        assert_eq!(StateCell::new(&js, JobState::Running).view(6, &styles), "   42 ");
        assert_eq!(StateCell::new(&js, JobState::Queued).view(6, &styles), "      ");
    }
}
