//! Runtime configuration for `jobsets`.
//!
//! [`Config`] is the resolved set of options, independent of where each one
//! came from. Sources are layered: built-in defaults, then the TOML file,
//! then command-line flags.
//!
//! # File format
//!
//! ```toml
//! row_height = 1
//! header_height = 1
//! newest_first = true
//! mouse = true
//! color = true
//!
//! [columns]
//! jobSetId = 0.3
//! latestSubmissionTime = 0.2
//! jobsQueued = 0.1
//! jobsPending = 0.1
//! jobsRunning = 0.1
//! jobsSucceeded = 0.1
//! jobsFailed = 0.1
//! ```
//!
//! A `[columns]` table replaces the default weights entirely; a column it
//! leaves out is hidden.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use jobset_table::{ColumnWeights, RowMetrics};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Config naturally has boolean flags"
)]
pub struct Config {
    // ========================================================================
    // Layout
    // ========================================================================
    /// Proportional column widths.
    pub columns: ColumnWeights,

    /// Lines per row.
    pub row_height: usize,

    /// Lines taken by the header.
    pub header_height: usize,

    // ========================================================================
    // Behaviour
    // ========================================================================
    /// Initial sort direction.
    pub newest_first: bool,

    /// Whether mouse input is captured.
    pub mouse: bool,

    /// Whether output is styled.
    pub color: bool,

    /// Exit on the first navigation request and print its route.
    pub print_navigation: bool,

    // ========================================================================
    // Data
    // ========================================================================
    /// JSON file to load job sets from.
    pub input: Option<PathBuf>,

    /// Seed for generated job sets. `None` picks one at startup.
    pub seed: Option<u64>,

    /// Number of generated job sets.
    pub count: usize,

    // ========================================================================
    // Logging
    // ========================================================================
    /// Log file. Without one, nothing is logged.
    pub log_file: Option<PathBuf>,

    /// Log verbosity level (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: ColumnWeights::default(),
            row_height: 1,
            header_height: 1,
            newest_first: true,
            mouse: true,
            color: true,
            print_navigation: false,
            input: None,
            seed: None,
            count: 200,
            log_file: None,
            verbosity: 0,
        }
    }
}

/// The subset of [`Config`] a TOML file may set. Absent keys keep their
/// current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub columns: Option<ColumnWeights>,
    pub row_height: Option<usize>,
    pub header_height: Option<usize>,
    pub newest_first: Option<bool>,
    pub mouse: Option<bool>,
    pub color: Option<bool>,
}

impl FileConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML or unknown keys.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// as [`FileConfig::parse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::parse(&text, path)
    }
}

impl Config {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlays the values a file sets.
    #[must_use]
    pub fn with_file(mut self, file: FileConfig) -> Self {
        if let Some(columns) = file.columns {
            self.columns = columns;
        }
        if let Some(row_height) = file.row_height {
            self.row_height = row_height;
        }
        if let Some(header_height) = file.header_height {
            self.header_height = header_height;
        }
        if let Some(newest_first) = file.newest_first {
            self.newest_first = newest_first;
        }
        if let Some(mouse) = file.mouse {
            self.mouse = mouse;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        self
    }

    /// Resolves the configuration from parsed CLI arguments.
    ///
    /// Loads `--config` when given, then applies flags on top.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be loaded or the result
    /// does not validate.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = &cli.config {
            config = config.with_file(FileConfig::load(path)?);
        }

        if cli.oldest_first {
            config.newest_first = false;
        }
        if cli.no_mouse {
            config.mouse = false;
        }
        if cli.no_color || no_color_requested(std::env::var_os("NO_COLOR").as_deref()) {
            config.color = false;
        }
        config.print_navigation = cli.print_navigation;
        config.input.clone_from(&cli.input);
        config.seed = cli.seed;
        config.count = cli.count;
        config.log_file.clone_from(&cli.log_file);
        config.verbosity = cli.verbose;

        config.validate()?;
        Ok(config)
    }

    /// Row and header heights for the table.
    #[must_use]
    pub const fn metrics(&self) -> RowMetrics {
        RowMetrics {
            row_height: self.row_height,
            header_height: self.header_height,
        }
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for invalid weights or zero heights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.columns.validate()?;
        if self.row_height == 0 {
            return Err(ConfigError::ZeroHeight("row_height"));
        }
        if self.header_height == 0 {
            return Err(ConfigError::ZeroHeight("header_height"));
        }
        Ok(())
    }

    /// Export configuration as a diagnostic string.
    #[must_use]
    pub fn to_diagnostic_string(&self) -> String {
        let on_off = |b: bool| if b { "on" } else { "off" };
        let mut lines = vec![
            format!("Columns: {:?}", self.columns),
            format!("Row height: {}", self.row_height),
            format!("Header height: {}", self.header_height),
            format!(
                "Order: {}",
                if self.newest_first { "newest first" } else { "oldest first" }
            ),
            format!("Mouse: {}", on_off(self.mouse)),
            format!("Color: {}", on_off(self.color)),
        ];
        match (&self.input, self.seed) {
            (Some(path), _) => lines.push(format!("Input: {}", path.display())),
            (None, seed) => lines.push(format!("Generated: {} (seed {seed:?})", self.count)),
        }
        if let Some(path) = &self.log_file {
            lines.push(format!("Log file: {}", path.display()));
        }
        lines.push(format!("Verbosity: {}", self.verbosity));
        lines.join("\n")
    }
}

/// `NO_COLOR` counts when set to any non-empty value, `0` included.
fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("cannot read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Config file is not valid TOML or has unknown keys.
    #[error("invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A column weight is out of range.
    #[error(transparent)]
    Weights(#[from] jobset_table::Error),

    /// A row or header height is zero.
    #[error("{0} must be at least 1")]
    ZeroHeight(&'static str),
}
