//! Command-line interface for `jobsets`.
//!
//! # Examples
//!
//! ```bash
//! # Browse 200 generated job sets
//! jobsets
//!
//! # Browse a JSON export, oldest first
//! jobsets --input job-sets.json --oldest-first
//!
//! # Print the table once, without a terminal
//! jobsets --seed 7 render --width 120 --height 30
//!
//! # Pick a job set and state, then print the jobs route
//! jobsets --print-navigation
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Job set summary table for the terminal.
///
/// Browse job sets with per-state job counts, select them, flip the
/// submission-time order, and open a job set's jobs in one state by
/// clicking its count.
#[derive(Parser, Debug, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI flags are naturally bools"
)]
#[command(
    name = "jobsets",
    author,
    version,
    about = "Job set summary table for the terminal"
)]
pub struct Cli {
    /// JSON file with an array of job sets
    ///
    /// Without it, job sets are generated from --seed
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Seed for deterministic job set generation
    #[arg(long, short = 's', env = "JOBSETS_SEED")]
    pub seed: Option<u64>,

    /// Number of job sets to generate
    #[arg(long, short = 'n', default_value_t = 200)]
    pub count: usize,

    /// TOML configuration file
    #[arg(long, short = 'c', env = "JOBSETS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start with the oldest submission first
    #[arg(long)]
    pub oldest_first: bool,

    /// Disable mouse support
    ///
    /// Keyboard navigation still works
    #[arg(long)]
    pub no_mouse: bool,

    /// Force color output off
    ///
    /// A non-empty `NO_COLOR` environment variable has the same effect
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file
    ///
    /// The terminal belongs to the table, so logs never go to stderr
    #[arg(long, env = "JOBSETS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Exit on the first opened job set and print its jobs route
    #[arg(long)]
    pub print_navigation: bool,

    /// Optional subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the table once to stdout, without terminal control
    Render(RenderArgs),

    /// Show the resolved configuration
    Diagnostics,
}

/// Arguments for the render subcommand.
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Table width in cells
    #[arg(long, default_value_t = 120)]
    pub width: usize,

    /// Table height in lines, header included
    ///
    /// Defaults to tall enough for every job set
    #[arg(long)]
    pub height: Option<usize>,

    /// Job set id to render as selected (repeatable)
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Get the effective seed (random if not specified).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Seed truncation is acceptable"
    )]
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(42, |d| d.as_nanos() as u64)
        })
    }
}
