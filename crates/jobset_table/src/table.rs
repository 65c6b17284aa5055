//! The composed job set table.
//!
//! [`JobSetTable`] is rebuilt from [`JobSetTableProps`] for every frame. It
//! renders a header row and the rows a [`Windowing`] implementation reports
//! as visible, and it routes pointer events to the row, header, sort and
//! state-cell adapters.
//!
//! Terminal layout, left to right: a checkbox gutter of [`CHECKBOX_WIDTH`]
//! cells, then the seven columns in [`ColumnKey::ALL`] order. Column widths
//! are resolved against the width left over after the gutter. Top to bottom:
//! `header_height` lines of header, then `row_height` lines per row.
//!
//! # Example
//!
//! ```rust
//! use jobset_table::{
//!     ColumnWeights, Intent, JobSet, JobSetTable, JobSetTableProps, JobState, PointerEvent,
//!     ScrollWindow, SelectedJobSets,
//! };
//!
//! let job_sets = vec![JobSet::new("a", "2026-10-16T07:56:00Z").with_failed(2)];
//! let selected = SelectedJobSets::new();
//! let weights = ColumnWeights::default();
//! let table = JobSetTable::new(JobSetTableProps {
//!     width: 104,
//!     height: 5,
//!     job_sets: &job_sets,
//!     selected: &selected,
//!     newest_first: true,
//!     column_weights: &weights,
//! });
//!
//! // The failed column starts at 4 (gutter) + 30 + 20 + 4 × 10 cells.
//! let window = ScrollWindow::new();
//! let mut intents: Vec<Intent> = Vec::new();
//! table.handle_pointer(&PointerEvent::click(96, 1), &window, &mut intents);
//! assert_eq!(
//!     intents,
//!     vec![Intent::OpenJobSet { job_set_id: "a".into(), state: JobState::Failed }]
//! );
//! ```

use std::ops::Range;

use tracing::trace;

use crate::cell::StateCell;
use crate::columns::{ColumnKey, ColumnLayout, ColumnWeights, resolve_column_widths};
use crate::header::CheckboxHeader;
use crate::input::PointerEvent;
use crate::intents::{NavigationIntents, SelectionIntents};
use crate::model::{JobSet, JobState, SelectedJobSets};
use crate::row::CheckboxRow;
use crate::sort::SortableHeaderCell;
use crate::style::{Styles, paint};
use crate::text::{Align, fit};
use crate::window::Windowing;

/// Cells reserved on the left of every line for the checkbox (`[x] `).
pub const CHECKBOX_WIDTH: usize = 4;

/// Everything the table renders, supplied fresh for each frame.
#[derive(Debug, Clone, Copy)]
pub struct JobSetTableProps<'a> {
    /// Table width in cells.
    pub width: usize,
    /// Table height in lines, header included.
    pub height: usize,
    /// Job sets in display order.
    pub job_sets: &'a [JobSet],
    /// Current selection.
    pub selected: &'a SelectedJobSets,
    /// Current submission-time sort direction.
    pub newest_first: bool,
    /// Proportional column widths.
    pub column_weights: &'a ColumnWeights,
}

/// Line heights of the header and of each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMetrics {
    /// Lines per row.
    pub row_height: usize,
    /// Lines taken by the header.
    pub header_height: usize,
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            row_height: 1,
            header_height: 1,
        }
    }
}

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The select-all checkbox.
    HeaderCheckbox,
    /// A column header.
    HeaderCell(ColumnKey),
    /// The checkbox of the row at this index.
    RowCheckbox(usize),
    /// A data cell.
    Cell { index: usize, column: ColumnKey },
}

/// The job set table for one frame.
#[derive(Debug, Clone)]
pub struct JobSetTable<'a> {
    props: JobSetTableProps<'a>,
    metrics: RowMetrics,
    styles: Styles,
    cursor: Option<(usize, ColumnKey)>,
}

impl<'a> JobSetTable<'a> {
    /// Creates the table for one frame.
    #[must_use]
    pub fn new(props: JobSetTableProps<'a>) -> Self {
        Self {
            props,
            metrics: RowMetrics::default(),
            styles: Styles::default(),
            cursor: None,
        }
    }

    /// Sets the row and header heights (builder pattern).
    #[must_use]
    pub const fn with_metrics(mut self, metrics: RowMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sets the styles (builder pattern).
    #[must_use]
    pub const fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Highlights one cell for keyboard users (builder pattern).
    #[must_use]
    pub const fn with_cursor(mut self, index: usize, column: ColumnKey) -> Self {
        self.cursor = Some((index, column));
        self
    }

    /// The props this frame was built from.
    #[must_use]
    pub const fn props(&self) -> &JobSetTableProps<'a> {
        &self.props
    }

    /// The line heights in use.
    #[must_use]
    pub const fn metrics(&self) -> RowMetrics {
        self.metrics
    }

    /// Number of rows in the table, visible or not.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.props.job_sets.len()
    }

    /// Column widths for this frame.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "terminal widths are small")]
    pub fn layout(&self) -> ColumnLayout {
        let available = self.props.width.saturating_sub(CHECKBOX_WIDTH);
        resolve_column_widths(available as f64, self.props.column_weights)
    }

    /// Lines available to rows below the header.
    #[must_use]
    pub const fn rows_height(&self) -> usize {
        self.props.height.saturating_sub(self.metrics.header_height)
    }

    /// Rows the window reports as visible.
    #[must_use]
    pub fn visible_rows<W: Windowing + ?Sized>(&self, window: &W) -> Range<usize> {
        window.visible_range(
            self.row_count(),
            self.metrics.row_height,
            self.rows_height(),
        )
    }

    /// The header checkbox state.
    #[must_use]
    pub fn header(&self) -> CheckboxHeader {
        CheckboxHeader::new(self.props.selected, self.row_count())
    }

    /// The submission-time header cell.
    #[must_use]
    pub const fn sort_cell(&self) -> SortableHeaderCell {
        SortableHeaderCell::new(
            ColumnKey::LatestSubmissionTime.label(),
            self.props.newest_first,
        )
    }

    /// The row adapter for `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<CheckboxRow<'a>> {
        self.props
            .job_sets
            .get(index)
            .map(|job_set| CheckboxRow::new(index, job_set, self.props.selected))
    }

    /// The state cell of row `index`.
    #[must_use]
    pub fn state_cell(&self, index: usize, state: JobState) -> Option<StateCell<'a>> {
        self.props
            .job_sets
            .get(index)
            .map(|job_set| StateCell::new(job_set, state))
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Renders the header and visible rows as lines, without trailing newlines.
    #[must_use]
    pub fn lines<W: Windowing + ?Sized>(&self, window: &W) -> Vec<String> {
        let layout = self.layout();
        let mut lines = Vec::new();
        if self.metrics.header_height > 0 && self.props.height > 0 {
            lines.push(self.header_line(&layout));
            lines.extend((1..self.metrics.header_height).map(|_| String::new()));
        }
        for index in self.visible_rows(window) {
            lines.push(self.row_line(index, &layout));
            lines.extend((1..self.metrics.row_height).map(|_| String::new()));
        }
        lines.truncate(self.props.height);
        lines
    }

    /// Renders the table as one string.
    #[must_use]
    pub fn view<W: Windowing + ?Sized>(&self, window: &W) -> String {
        self.lines(window).join("\n")
    }

    fn header_line(&self, layout: &ColumnLayout) -> String {
        let header = self.header();
        let mut remaining = self.props.width;
        let mut line = String::new();

        let gutter = CHECKBOX_WIDTH.min(remaining);
        let style = if header.is_disabled() {
            self.styles.disabled
        } else {
            self.styles.header
        };
        line.push_str(&paint(style, &fit(header.checkbox(), gutter, Align::Left)));
        remaining -= gutter;

        for key in ColumnKey::ALL {
            let width = layout.cells(key).min(remaining);
            if width == 0 {
                continue;
            }
            remaining -= width;
            if key == ColumnKey::LatestSubmissionTime {
                line.push_str(&self.sort_cell().view(width, &self.styles));
            } else {
                let align = if key.is_numeric() {
                    Align::Right
                } else {
                    Align::Left
                };
                line.push_str(&paint(self.styles.header, &fit(key.label(), width, align)));
            }
        }
        line
    }

    fn row_line(&self, index: usize, layout: &ColumnLayout) -> String {
        let Some(row) = self.row(index) else {
            return String::new();
        };
        let job_set = row.job_set();
        let base = if row.is_checked() {
            self.styles.selected
        } else {
            self.styles.cell
        };
        let mut remaining = self.props.width;
        let mut line = String::new();

        let gutter = CHECKBOX_WIDTH.min(remaining);
        line.push_str(&paint(base, &fit(row.checkbox(), gutter, Align::Left)));
        remaining -= gutter;

        for key in ColumnKey::ALL {
            let width = layout.cells(key).min(remaining);
            if width == 0 {
                continue;
            }
            remaining -= width;
            let under_cursor = self.cursor == Some((index, key));
            let cell = match key.state() {
                Some(state) if !under_cursor => {
                    let cell = StateCell::new(job_set, state);
                    if cell.is_link() {
                        cell.view(width, &self.styles)
                    } else {
                        paint(base, &fit(&job_set.cell_text(key), width, Align::Right))
                    }
                }
                _ => {
                    let align = if key.is_numeric() {
                        Align::Right
                    } else {
                        Align::Left
                    };
                    let style = if under_cursor { self.styles.cursor } else { base };
                    paint(style, &fit(&job_set.cell_text(key), width, align))
                }
            };
            line.push_str(&cell);
        }
        line
    }

    // ------------------------------------------------------------------
    // Routing
    // ------------------------------------------------------------------

    /// Maps a position relative to the table origin to what it lands on.
    #[must_use]
    pub fn hit_test<W: Windowing + ?Sized>(&self, x: u16, y: u16, window: &W) -> Option<Hit> {
        let (x, y) = (usize::from(x), usize::from(y));
        if x >= self.props.width || y >= self.props.height {
            return None;
        }

        let column = |x: usize| {
            if x < CHECKBOX_WIDTH {
                None
            } else {
                self.layout().column_at(x - CHECKBOX_WIDTH)
            }
        };

        if y < self.metrics.header_height {
            return if x < CHECKBOX_WIDTH {
                Some(Hit::HeaderCheckbox)
            } else {
                column(x).map(Hit::HeaderCell)
            };
        }

        let band = (y - self.metrics.header_height) / self.metrics.row_height.max(1);
        let visible = self.visible_rows(window);
        let index = visible.start + band;
        if index >= visible.end {
            return None;
        }
        if x < CHECKBOX_WIDTH {
            Some(Hit::RowCheckbox(index))
        } else {
            column(x).map(|column| Hit::Cell { index, column })
        }
    }

    /// Activates what `hit` points at.
    ///
    /// `shift` turns a row checkbox click into a range change. Returns `true`
    /// if an intent was emitted; at most one intent is emitted.
    pub fn activate<P>(&self, hit: Hit, shift: bool, ports: &mut P) -> bool
    where
        P: SelectionIntents + NavigationIntents + ?Sized,
    {
        trace!(?hit, shift, "activate");
        match hit {
            Hit::HeaderCheckbox => self.header().click(ports),
            Hit::HeaderCell(ColumnKey::LatestSubmissionTime) => {
                self.sort_cell().activate(ports);
                true
            }
            Hit::HeaderCell(_) => false,
            Hit::RowCheckbox(index) => self.row(index).is_some_and(|row| {
                row.toggle(shift, ports);
                true
            }),
            Hit::Cell { index, column } => column
                .state()
                .and_then(|state| self.state_cell(index, state))
                .is_some_and(|cell| cell.activate(ports)),
        }
    }

    /// Routes a pointer event. Only left-button presses activate anything.
    ///
    /// Returns `true` if an intent was emitted.
    pub fn handle_pointer<W, P>(&self, event: &PointerEvent, window: &W, ports: &mut P) -> bool
    where
        W: Windowing + ?Sized,
        P: SelectionIntents + NavigationIntents + ?Sized,
    {
        if !event.is_left_press() {
            return false;
        }
        self.hit_test(event.x, event.y, window)
            .is_some_and(|hit| self.activate(hit, event.shift, ports))
    }
}
