//! Terminal lifecycle and event loop.
//!
//! [`Program`] takes over the terminal (raw mode, alternate screen, hidden
//! cursor and, when enabled, mouse capture), feeds crossterm events to the
//! [`App`] and redraws whenever the frame changes. The terminal is restored
//! on every exit path, including errors.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::{debug, info};

use crate::app::App;

/// Errors that can occur while running the program.
#[derive(thiserror::Error, Debug)]
pub enum ProgramError {
    /// I/O error during terminal operations.
    ///
    /// Typically the terminal is not available (stdout is a pipe) or was
    /// closed while running.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized [`Result`] for program operations.
pub type Result<T> = std::result::Result<T, ProgramError>;

/// Input poll timeout, about 60 frames per second.
const FRAME: Duration = Duration::from_millis(16);

/// Runs an [`App`] in the terminal.
#[derive(Debug)]
pub struct Program {
    app: App,
}

impl Program {
    /// Creates a program for `app`.
    #[must_use]
    pub const fn new(app: App) -> Self {
        Self { app }
    }

    /// Runs on stdout and returns the final model.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError::Io`] if terminal setup, input or output fails.
    pub fn run(self) -> Result<App> {
        let stdout = io::stdout();
        self.run_with_writer(stdout)
    }

    /// Runs with a custom writer and returns the final model.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError::Io`] if terminal setup, input or output fails.
    pub fn run_with_writer<W: Write>(self, mut writer: W) -> Result<App> {
        let mouse = self.app.mouse_enabled();

        enable_raw_mode()?;
        let result = Self::setup(&mut writer, mouse).and_then(|()| self.event_loop(&mut writer));

        if mouse {
            let _ = execute!(writer, DisableMouseCapture);
        }
        let _ = execute!(writer, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        info!("terminal restored");

        result
    }

    fn setup<W: Write>(writer: &mut W, mouse: bool) -> Result<()> {
        execute!(writer, EnterAlternateScreen, Hide)?;
        if mouse {
            execute!(writer, EnableMouseCapture)?;
        }
        Ok(())
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<App> {
        if let Ok((width, height)) = terminal::size() {
            self.app.resize(usize::from(width), usize::from(height));
        }

        let mut last_view = String::new();
        Self::render(&self.app, writer, &mut last_view)?;

        loop {
            if event::poll(FRAME)? {
                let event = event::read()?;
                if self.app.update(&event) {
                    Self::render(&self.app, writer, &mut last_view)?;
                }
            }
            if self.app.should_quit() {
                debug!("leaving event loop");
                return Ok(self.app);
            }
        }
    }

    fn render<W: Write>(app: &App, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = app.view();

        // Skip if view hasn't changed
        if view == *last_view {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All))?;
        write!(writer, "{view}")?;
        writer.flush()?;

        *last_view = view;
        Ok(())
    }
}
