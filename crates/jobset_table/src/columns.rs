//! Column keys, proportional weights and the layout resolver.
//!
//! Every column's width is its weight times the available width. Weights are
//! independent fractions: they are not normalized and need not sum to one.
//!
//! # Example
//!
//! ```rust
//! use jobset_table::{ColumnKey, ColumnWeights, resolve_column_widths};
//!
//! let weights = ColumnWeights::default();
//! let layout = resolve_column_widths(200.0, &weights);
//! assert_eq!(layout.width(ColumnKey::JobSetId), 0.3 * 200.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::JobState;

/// The seven table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKey {
    JobSetId,
    LatestSubmissionTime,
    JobsQueued,
    JobsPending,
    JobsRunning,
    JobsSucceeded,
    JobsFailed,
}

impl ColumnKey {
    /// All columns in display order.
    pub const ALL: [Self; 7] = [
        Self::JobSetId,
        Self::LatestSubmissionTime,
        Self::JobsQueued,
        Self::JobsPending,
        Self::JobsRunning,
        Self::JobsSucceeded,
        Self::JobsFailed,
    ];

    /// Position of the column in display order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::JobSetId => "Job Set",
            Self::LatestSubmissionTime => "Submission Time",
            Self::JobsQueued => "Queued",
            Self::JobsPending => "Pending",
            Self::JobsRunning => "Running",
            Self::JobsSucceeded => "Succeeded",
            Self::JobsFailed => "Failed",
        }
    }

    /// The field name used by job set data and weight configuration.
    #[must_use]
    pub const fn data_key(self) -> &'static str {
        match self {
            Self::JobSetId => "jobSetId",
            Self::LatestSubmissionTime => "latestSubmissionTime",
            Self::JobsQueued => "jobsQueued",
            Self::JobsPending => "jobsPending",
            Self::JobsRunning => "jobsRunning",
            Self::JobsSucceeded => "jobsSucceeded",
            Self::JobsFailed => "jobsFailed",
        }
    }

    /// The job state counted in this column, if it is a count column.
    #[must_use]
    pub const fn state(self) -> Option<JobState> {
        match self {
            Self::JobSetId | Self::LatestSubmissionTime => None,
            Self::JobsQueued => Some(JobState::Queued),
            Self::JobsPending => Some(JobState::Pending),
            Self::JobsRunning => Some(JobState::Running),
            Self::JobsSucceeded => Some(JobState::Succeeded),
            Self::JobsFailed => Some(JobState::Failed),
        }
    }

    /// Whether the column holds a right-aligned number.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.state().is_some()
    }
}

/// Fraction of the table width given to each column.
///
/// A weight missing from serialized configuration is zero, which hides the
/// column. [`ColumnWeights::default`] is the layout used when nothing is
/// configured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnWeights {
    #[serde(default)]
    pub job_set_id: f64,
    #[serde(default)]
    pub latest_submission_time: f64,
    #[serde(default)]
    pub jobs_queued: f64,
    #[serde(default)]
    pub jobs_pending: f64,
    #[serde(default)]
    pub jobs_running: f64,
    #[serde(default)]
    pub jobs_succeeded: f64,
    #[serde(default)]
    pub jobs_failed: f64,
}

impl Default for ColumnWeights {
    fn default() -> Self {
        Self {
            job_set_id: 0.3,
            latest_submission_time: 0.2,
            jobs_queued: 0.1,
            jobs_pending: 0.1,
            jobs_running: 0.1,
            jobs_succeeded: 0.1,
            jobs_failed: 0.1,
        }
    }
}

impl ColumnWeights {
    /// Weights with every column hidden.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            job_set_id: 0.0,
            latest_submission_time: 0.0,
            jobs_queued: 0.0,
            jobs_pending: 0.0,
            jobs_running: 0.0,
            jobs_succeeded: 0.0,
            jobs_failed: 0.0,
        }
    }

    /// Returns the weight of a column.
    #[must_use]
    pub const fn weight(&self, key: ColumnKey) -> f64 {
        match key {
            ColumnKey::JobSetId => self.job_set_id,
            ColumnKey::LatestSubmissionTime => self.latest_submission_time,
            ColumnKey::JobsQueued => self.jobs_queued,
            ColumnKey::JobsPending => self.jobs_pending,
            ColumnKey::JobsRunning => self.jobs_running,
            ColumnKey::JobsSucceeded => self.jobs_succeeded,
            ColumnKey::JobsFailed => self.jobs_failed,
        }
    }

    /// Sets the weight of a column (builder pattern).
    #[must_use]
    pub fn with_weight(mut self, key: ColumnKey, weight: f64) -> Self {
        let slot = match key {
            ColumnKey::JobSetId => &mut self.job_set_id,
            ColumnKey::LatestSubmissionTime => &mut self.latest_submission_time,
            ColumnKey::JobsQueued => &mut self.jobs_queued,
            ColumnKey::JobsPending => &mut self.jobs_pending,
            ColumnKey::JobsRunning => &mut self.jobs_running,
            ColumnKey::JobsSucceeded => &mut self.jobs_succeeded,
            ColumnKey::JobsFailed => &mut self.jobs_failed,
        };
        *slot = weight;
        self
    }

    /// Checks that every weight is a finite fraction in `[0, 1]`.
    ///
    /// The table itself accepts any weights; this is for configuration
    /// loaders that want to reject obvious mistakes early.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColumnWeight`] for the first offending column.
    pub fn validate(&self) -> Result<()> {
        for key in ColumnKey::ALL {
            let weight = self.weight(key);
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(Error::InvalidColumnWeight {
                    column: key.data_key(),
                    weight,
                });
            }
        }
        Ok(())
    }
}

/// Tolerance for floating point error when flooring widths to cells.
const CELL_EPSILON: f64 = 1e-9;

/// Resolved widths for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    widths: [f64; 7],
}

/// Resolves every column width as `weight × total_width`.
///
/// Nothing is cached: call this on every layout pass so a resize is picked
/// up immediately.
#[must_use]
pub fn resolve_column_widths(total_width: f64, weights: &ColumnWeights) -> ColumnLayout {
    let mut widths = [0.0; 7];
    for key in ColumnKey::ALL {
        widths[key.index()] = weights.weight(key) * total_width;
    }
    ColumnLayout { widths }
}

impl ColumnLayout {
    /// Exact width of a column.
    #[must_use]
    pub const fn width(&self, key: ColumnKey) -> f64 {
        self.widths[key.index()]
    }

    /// Width of a column in whole terminal cells.
    ///
    /// Fractional cells are dropped; negative or non-finite widths become zero.
    /// A product a rounding error short of a whole cell counts as that cell.
    #[must_use]
    pub fn cells(&self, key: ColumnKey) -> usize {
        let width = self.width(key) + CELL_EPSILON;
        if width.is_finite() && width >= 1.0 {
            #[expect(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "width is finite and positive; flooring is the intended rounding"
            )]
            let cells = width.floor() as usize;
            cells
        } else {
            0
        }
    }

    /// Whether the column takes up any cells.
    #[must_use]
    pub fn is_visible(&self, key: ColumnKey) -> bool {
        self.cells(key) > 0
    }

    /// Cell offset at which a column starts, relative to the first column.
    #[must_use]
    pub fn start(&self, key: ColumnKey) -> usize {
        ColumnKey::ALL[..key.index()]
            .iter()
            .map(|k| self.cells(*k))
            .sum()
    }

    /// Total cells taken by all columns.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        ColumnKey::ALL.iter().map(|k| self.cells(*k)).sum()
    }

    /// Returns the visible column covering cell offset `x`, if any.
    #[must_use]
    pub fn column_at(&self, x: usize) -> Option<ColumnKey> {
        let mut start = 0;
        for key in ColumnKey::ALL {
            let end = start + self.cells(key);
            if x >= start && x < end {
                return Some(key);
            }
            start = end;
        }
        None
    }
}
