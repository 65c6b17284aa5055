//! Job sets, job states and the selection map.
//!
//! These records are owned by whoever feeds the table. The table only reads
//! them; changes travel back as intents (see [`crate::intents`]).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns::ColumnKey;

/// A group of jobs submitted under one job set identifier, summarized by
/// per-state counts.
///
/// Counts are optional: data sources may omit a state entirely. An absent
/// count and a zero count are rendered the same way (see [`crate::cell`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSet {
    /// Identifier, unique within a displayed list.
    pub job_set_id: String,
    /// Queue the job set was submitted to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    /// Latest submission time, displayed as given.
    #[serde(default)]
    pub latest_submission_time: String,
    #[serde(default)]
    pub jobs_queued: Option<i64>,
    #[serde(default)]
    pub jobs_pending: Option<i64>,
    #[serde(default)]
    pub jobs_running: Option<i64>,
    #[serde(default)]
    pub jobs_succeeded: Option<i64>,
    #[serde(default)]
    pub jobs_failed: Option<i64>,
}

impl JobSet {
    /// Creates a job set with every count absent.
    #[must_use]
    pub fn new(job_set_id: impl Into<String>, latest_submission_time: impl Into<String>) -> Self {
        Self {
            job_set_id: job_set_id.into(),
            queue: None,
            latest_submission_time: latest_submission_time.into(),
            jobs_queued: None,
            jobs_pending: None,
            jobs_running: None,
            jobs_succeeded: None,
            jobs_failed: None,
        }
    }

    /// Sets the owning queue (builder pattern).
    #[must_use]
    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    /// Sets the count for one state (builder pattern).
    #[must_use]
    pub fn with_count(mut self, state: JobState, count: i64) -> Self {
        *self.count_mut(state) = Some(count);
        self
    }

    /// Sets the queued count (builder pattern).
    #[must_use]
    pub fn with_queued(self, count: i64) -> Self {
        self.with_count(JobState::Queued, count)
    }

    /// Sets the pending count (builder pattern).
    #[must_use]
    pub fn with_pending(self, count: i64) -> Self {
        self.with_count(JobState::Pending, count)
    }

    /// Sets the running count (builder pattern).
    #[must_use]
    pub fn with_running(self, count: i64) -> Self {
        self.with_count(JobState::Running, count)
    }

    /// Sets the succeeded count (builder pattern).
    #[must_use]
    pub fn with_succeeded(self, count: i64) -> Self {
        self.with_count(JobState::Succeeded, count)
    }

    /// Sets the failed count (builder pattern).
    #[must_use]
    pub fn with_failed(self, count: i64) -> Self {
        self.with_count(JobState::Failed, count)
    }

    /// Returns the count recorded for `state`.
    #[must_use]
    pub const fn count(&self, state: JobState) -> Option<i64> {
        match state {
            JobState::Queued => self.jobs_queued,
            JobState::Pending => self.jobs_pending,
            JobState::Running => self.jobs_running,
            JobState::Succeeded => self.jobs_succeeded,
            JobState::Failed => self.jobs_failed,
        }
    }

    fn count_mut(&mut self, state: JobState) -> &mut Option<i64> {
        match state {
            JobState::Queued => &mut self.jobs_queued,
            JobState::Pending => &mut self.jobs_pending,
            JobState::Running => &mut self.jobs_running,
            JobState::Succeeded => &mut self.jobs_succeeded,
            JobState::Failed => &mut self.jobs_failed,
        }
    }

    /// Returns the display text for a column of this job set.
    ///
    /// Absent counts render as an empty cell; present counts, including
    /// zero and negative values, render as their decimal value.
    #[must_use]
    pub fn cell_text(&self, column: ColumnKey) -> String {
        match column {
            ColumnKey::JobSetId => self.job_set_id.clone(),
            ColumnKey::LatestSubmissionTime => self.latest_submission_time.clone(),
            _ => column
                .state()
                .and_then(|state| self.count(state))
                .map(|count| count.to_string())
                .unwrap_or_default(),
        }
    }
}

/// The job states summarized by a job set, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobState {
    Queued,
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl JobState {
    /// All states in column order.
    pub const ALL: [Self; 5] = [
        Self::Queued,
        Self::Pending,
        Self::Running,
        Self::Succeeded,
        Self::Failed,
    ];

    /// The state label carried by navigation intents.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Queued => "Queued",
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
        }
    }

    /// The count column showing this state.
    #[must_use]
    pub const fn column(self) -> ColumnKey {
        match self {
            Self::Queued => ColumnKey::JobsQueued,
            Self::Pending => ColumnKey::JobsPending,
            Self::Running => ColumnKey::JobsRunning,
            Self::Succeeded => ColumnKey::JobsSucceeded,
            Self::Failed => ColumnKey::JobsFailed,
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The currently selected job sets, keyed by job set identifier.
///
/// Membership is decided by identifier, never by record equality, so a
/// refreshed record with new counts is still selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedJobSets {
    entries: BTreeMap<String, JobSet>,
}

impl SelectedJobSets {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a job set with this identifier is selected.
    #[must_use]
    pub fn contains(&self, job_set_id: &str) -> bool {
        self.entries.contains_key(job_set_id)
    }

    /// Number of selected job sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds (or refreshes) a job set in the selection.
    pub fn insert(&mut self, job_set: JobSet) {
        self.entries.insert(job_set.job_set_id.clone(), job_set);
    }

    /// Removes a job set from the selection, returning it if it was present.
    pub fn remove(&mut self, job_set_id: &str) -> Option<JobSet> {
        self.entries.remove(job_set_id)
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|id, _| keep(id));
    }

    /// Iterates over the selected identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over the selected job sets in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &JobSet> {
        self.entries.values()
    }
}

impl FromIterator<JobSet> for SelectedJobSets {
    fn from_iter<I: IntoIterator<Item = JobSet>>(iter: I) -> Self {
        let mut selected = Self::new();
        for job_set in iter {
            selected.insert(job_set);
        }
        selected
    }
}
