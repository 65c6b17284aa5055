//! Canonical job set state.
//!
//! [`JobSetsContainer`] owns the list, the selection and the sort direction,
//! and applies the intents the table emits. A new table is built from
//! [`JobSetsContainer::props`] after every change.

use std::cmp::Reverse;
use std::fmt;

use chrono::{DateTime, Utc};
use jobset_table::{
    ColumnWeights, JobSet, JobSetTableProps, JobState, NavigationIntents, SelectedJobSets,
    SelectionIntents,
};
use tracing::{debug, warn};

/// Where a navigation intent points: the jobs of one job set in one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub queue: Option<String>,
    pub job_set_id: String,
    pub state: JobState,
}

impl NavigationTarget {
    /// The jobs view route for this target.
    #[must_use]
    pub fn route(&self) -> String {
        let mut route = String::from("/jobs?");
        if let Some(queue) = &self.queue {
            route.push_str("queue=");
            route.push_str(&urlencoding::encode(queue));
            route.push('&');
        }
        route.push_str("job_set=");
        route.push_str(&urlencoding::encode(&self.job_set_id));
        route.push_str("&job_states=");
        route.push_str(self.state.label());
        route
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

/// Submission time as a sort key. Unparseable times sort as the oldest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SubmissionKey {
    Raw(String),
    Parsed(DateTime<Utc>),
}

impl SubmissionKey {
    fn of(job_set: &JobSet) -> Self {
        DateTime::parse_from_rfc3339(&job_set.latest_submission_time).map_or_else(
            |_| Self::Raw(job_set.latest_submission_time.clone()),
            |time| Self::Parsed(time.with_timezone(&Utc)),
        )
    }
}

/// Sorts by submission time, keeping input order between equal times.
pub fn sort_job_sets(job_sets: &mut [JobSet], newest_first: bool) {
    if newest_first {
        job_sets.sort_by_cached_key(|js| Reverse(SubmissionKey::of(js)));
    } else {
        job_sets.sort_by_cached_key(SubmissionKey::of);
    }
}

/// Owner of the job set list, the selection and the sort direction.
#[derive(Debug, Clone)]
pub struct JobSetsContainer {
    job_sets: Vec<JobSet>,
    selected: SelectedJobSets,
    newest_first: bool,
    column_weights: ColumnWeights,
    last_index: usize,
    navigation: Option<NavigationTarget>,
}

impl Default for JobSetsContainer {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl JobSetsContainer {
    /// Creates a container sorted newest first.
    #[must_use]
    pub fn new(job_sets: Vec<JobSet>) -> Self {
        let mut container = Self {
            job_sets: Vec::new(),
            selected: SelectedJobSets::new(),
            newest_first: true,
            column_weights: ColumnWeights::default(),
            last_index: 0,
            navigation: None,
        };
        container.set_job_sets(job_sets);
        container
    }

    /// Sets the sort direction and re-sorts (builder pattern).
    #[must_use]
    pub fn with_newest_first(mut self, newest_first: bool) -> Self {
        self.newest_first = newest_first;
        sort_job_sets(&mut self.job_sets, newest_first);
        self
    }

    /// Sets the column weights (builder pattern).
    #[must_use]
    pub const fn with_column_weights(mut self, weights: ColumnWeights) -> Self {
        self.column_weights = weights;
        self
    }

    /// Replaces the list. Selected job sets that are no longer listed are
    /// dropped from the selection.
    pub fn set_job_sets(&mut self, mut job_sets: Vec<JobSet>) {
        sort_job_sets(&mut job_sets, self.newest_first);
        self.selected
            .retain(|id| job_sets.iter().any(|js| js.job_set_id == id));
        self.job_sets = job_sets;
        self.last_index = self.last_index.min(self.job_sets.len().saturating_sub(1));
        debug!(
            rows = self.job_sets.len(),
            selected = self.selected.len(),
            "job sets replaced"
        );
    }

    /// Job sets in display order.
    #[must_use]
    pub fn job_sets(&self) -> &[JobSet] {
        &self.job_sets
    }

    #[must_use]
    pub const fn selected(&self) -> &SelectedJobSets {
        &self.selected
    }

    #[must_use]
    pub const fn newest_first(&self) -> bool {
        self.newest_first
    }

    #[must_use]
    pub const fn column_weights(&self) -> &ColumnWeights {
        &self.column_weights
    }

    /// Index the next shift-selection extends from.
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.last_index
    }

    /// The most recent navigation request, if any.
    #[must_use]
    pub const fn navigation(&self) -> Option<&NavigationTarget> {
        self.navigation.as_ref()
    }

    /// Takes the pending navigation request.
    pub fn take_navigation(&mut self) -> Option<NavigationTarget> {
        self.navigation.take()
    }

    /// Table props for a viewport of `width` × `height` cells.
    #[must_use]
    pub fn props(&self, width: usize, height: usize) -> JobSetTableProps<'_> {
        JobSetTableProps {
            width,
            height,
            job_sets: &self.job_sets,
            selected: &self.selected,
            newest_first: self.newest_first,
            column_weights: &self.column_weights,
        }
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        let Some(job_set) = self.job_sets.get(index) else {
            return;
        };
        if selected {
            self.selected.insert(job_set.clone());
        } else {
            self.selected.remove(&job_set.job_set_id);
        }
    }

    fn in_range(&self, index: usize, intent: &str) -> bool {
        let ok = index < self.job_sets.len();
        if !ok {
            warn!(index, rows = self.job_sets.len(), intent, "index out of range, ignored");
        }
        ok
    }
}

impl SelectionIntents for JobSetsContainer {
    fn select_job_set(&mut self, index: usize, selected: bool) {
        if !self.in_range(index, "select_job_set") {
            return;
        }
        self.set_selected(index, selected);
        self.last_index = index;
        debug!(index, selected, total = self.selected.len(), "selection changed");
    }

    fn shift_select_job_set(&mut self, index: usize, selected: bool) {
        if !self.in_range(index, "shift_select_job_set") {
            return;
        }
        let (from, to) = if self.last_index <= index {
            (self.last_index, index)
        } else {
            (index, self.last_index)
        };
        for i in from..=to {
            self.set_selected(i, selected);
        }
        self.last_index = index;
        debug!(from, to, selected, total = self.selected.len(), "range selection changed");
    }

    fn select_all(&mut self) {
        self.selected = self.job_sets.iter().cloned().collect();
        debug!(total = self.selected.len(), "selected all");
    }

    fn deselect_all(&mut self) {
        self.selected.clear();
        debug!("selection cleared");
    }
}

impl NavigationIntents for JobSetsContainer {
    fn open_job_set(&mut self, job_set_id: &str, state: JobState) {
        let queue = self
            .job_sets
            .iter()
            .find(|js| js.job_set_id == job_set_id)
            .and_then(|js| js.queue.clone());
        let target = NavigationTarget {
            queue,
            job_set_id: job_set_id.to_string(),
            state,
        };
        debug!(route = %target, "navigation requested");
        self.navigation = Some(target);
    }

    fn change_order(&mut self, newest_first: bool) {
        self.newest_first = newest_first;
        sort_job_sets(&mut self.job_sets, newest_first);
        self.last_index = 0;
        debug!(newest_first, "order changed");
    }
}
