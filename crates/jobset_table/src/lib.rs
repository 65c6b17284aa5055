#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Job Set Table
//!
//! A virtualized summary table of job sets for terminal applications.
//!
//! Each row is a job set with per-state job counts. The table lets an
//! operator multi-select job sets, flip the submission-time sort direction,
//! and drill into a job set's jobs by clicking a non-zero state count.
//!
//! The table is a pure presentation layer. It never owns the job set list,
//! the selection or the sort direction; those arrive as [`JobSetTableProps`]
//! on every frame, and every interaction is reported back through the
//! [`SelectionIntents`] and [`NavigationIntents`] ports.
//!
//! ## Modules
//!
//! - [`model`] - job sets, job states and the selection map
//! - [`columns`] - column keys, weights and the layout resolver
//! - [`window`] - the windowing capability used for virtualization
//! - [`intents`] - intent ports and the [`Intent`] message enum
//! - [`row`] / [`header`] - checkbox adapters for rows and the header
//! - [`cell`] - the state-cell click router
//! - [`sort`] - the sortable submission-time header cell
//! - [`input`] - pointer events translated from crossterm
//! - [`style`] - styles used when painting the table
//! - [`table`] - the composed [`JobSetTable`]
//!
//! ## Example
//!
//! ```rust
//! use jobset_table::{
//!     ColumnWeights, Intent, JobSet, JobSetTable, JobSetTableProps, ScrollWindow,
//!     SelectedJobSets,
//! };
//!
//! let job_sets = vec![JobSet::new("nightly-etl", "2026-10-16T07:56:00Z").with_failed(2)];
//! let selected = SelectedJobSets::new();
//! let weights = ColumnWeights::default();
//!
//! let table = JobSetTable::new(JobSetTableProps {
//!     width: 100,
//!     height: 10,
//!     job_sets: &job_sets,
//!     selected: &selected,
//!     newest_first: true,
//!     column_weights: &weights,
//! });
//!
//! let window = ScrollWindow::new();
//! let view = table.view(&window);
//! assert!(view.contains("nightly-etl"));
//!
//! // Nothing is selected yet, so the header checkbox asks for everything.
//! let mut intents: Vec<Intent> = Vec::new();
//! table.header().click(&mut intents);
//! assert_eq!(intents, vec![Intent::SelectAll]);
//! ```

pub mod cell;
pub mod columns;
pub mod error;
pub mod header;
pub mod input;
pub mod intents;
pub mod model;
pub mod row;
pub mod sort;
pub mod style;
pub mod table;
mod text;
pub mod window;

pub use cell::StateCell;
pub use columns::{ColumnKey, ColumnLayout, ColumnWeights, resolve_column_widths};
pub use error::{Error, Result};
pub use header::CheckboxHeader;
pub use input::{PointerAction, PointerButton, PointerEvent, from_crossterm_mouse};
pub use intents::{Intent, NavigationIntents, SelectionIntents};
pub use model::{JobSet, JobState, SelectedJobSets};
pub use row::CheckboxRow;
pub use sort::SortableHeaderCell;
pub use style::Styles;
pub use table::{CHECKBOX_WIDTH, Hit, JobSetTable, JobSetTableProps, RowMetrics};
pub use window::{ScrollWindow, Windowing};
