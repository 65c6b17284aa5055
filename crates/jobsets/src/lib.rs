#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # jobsets
//!
//! Terminal browser for job sets, built on [`jobset_table`].
//!
//! The binary wires these pieces together:
//!
//! - [`cli`] and [`config`] resolve options from flags, environment and a
//!   TOML file
//! - [`data`] loads job sets from JSON or generates them from a seed
//! - [`container`] owns the list, the selection and the sort direction and
//!   applies the table's intents
//! - [`app`] is the update/view model and [`keymap`] its keybindings
//! - [`program`] owns the terminal and runs the event loop
//! - [`logging`] sends `tracing` output to a file

pub mod app;
pub mod cli;
pub mod config;
pub mod container;
pub mod data;
pub mod keymap;
pub mod logging;
pub mod program;

pub use app::{App, render_table};
pub use cli::{Cli, Command, RenderArgs};
pub use config::{Config, ConfigError};
pub use container::{JobSetsContainer, NavigationTarget};
pub use data::DataError;
pub use program::{Program, ProgramError};
