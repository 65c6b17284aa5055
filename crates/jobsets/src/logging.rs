//! Log setup.
//!
//! The table owns the terminal, so logs only go to a file. Without a log
//! file no subscriber is installed and every `tracing` event is dropped.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Only show warnings and errors
    Warn,
    /// Show info messages
    Info,
    /// Show debug messages
    Debug,
    /// Show all messages including trace
    Trace,
}

impl LogLevel {
    /// Level for a `-v` count.
    #[must_use]
    pub const fn from_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    #[must_use]
    pub const fn as_level(self) -> Level {
        match self {
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Default filter directive, used when `RUST_LOG` is unset.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Errors from installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot install log subscriber: {0}")]
    Install(String),
}

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity level.
#[must_use]
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()))
}

/// Installs a global subscriber appending to `log_file`.
///
/// Does nothing when `log_file` is `None`.
///
/// # Errors
///
/// Returns [`LoggingError`] if the file cannot be opened or a global
/// subscriber is already installed.
pub fn init(log_file: Option<&Path>, level: LogLevel) -> Result<(), LoggingError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))?;

    tracing::info!(path = %path.display(), level = ?level.as_level(), "logging started");
    Ok(())
}
