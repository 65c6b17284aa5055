//! The interactive table model.
//!
//! [`App`] follows an update/view loop: [`App::update`] consumes one
//! terminal event and [`App::view`] renders the current frame. Pointer and
//! keyboard input both go through the table's adapters; the intents they
//! produce are collected and then applied to the [`JobSetsContainer`].

use crossterm::event::{Event, KeyEventKind, MouseEvent};
use jobset_table::{
    ColumnKey, Hit, Intent, JobSetTable, PointerButton, RowMetrics, ScrollWindow, Styles,
    from_crossterm_mouse, window::rows_per_page,
};
use tracing::{debug, info, trace};
use unicode_width::UnicodeWidthChar;

use crate::config::Config;
use crate::container::{JobSetsContainer, NavigationTarget};
use crate::keymap::{Action, KeyMap, key_name};

/// Lines below the table used for the status bar.
const STATUS_HEIGHT: usize = 1;

/// Renders the container's table once, without cursor or status bar.
#[must_use]
pub fn render_table(
    container: &JobSetsContainer,
    width: usize,
    height: usize,
    metrics: RowMetrics,
    styles: Styles,
) -> String {
    JobSetTable::new(container.props(width, height))
        .with_metrics(metrics)
        .with_styles(styles)
        .view(&ScrollWindow::new())
}

/// Interactive state of the job set browser.
#[derive(Debug)]
pub struct App {
    container: JobSetsContainer,
    window: ScrollWindow,
    keymap: KeyMap,
    metrics: RowMetrics,
    styles: Styles,
    width: usize,
    height: usize,
    cursor_row: usize,
    cursor_column: ColumnKey,
    mouse: bool,
    print_navigation: bool,
    status: Option<String>,
    last_navigation: Option<NavigationTarget>,
    quit: bool,
}

impl App {
    /// Creates the model for a container and configuration.
    #[must_use]
    pub fn new(container: JobSetsContainer, config: &Config) -> Self {
        let styles = if config.color {
            Styles::default()
        } else {
            Styles::plain()
        };
        Self {
            container,
            window: ScrollWindow::new(),
            keymap: KeyMap::default(),
            metrics: config.metrics(),
            styles,
            width: 80,
            height: 24,
            cursor_row: 0,
            cursor_column: ColumnKey::JobSetId,
            mouse: config.mouse,
            print_navigation: config.print_navigation,
            status: None,
            last_navigation: None,
            quit: false,
        }
    }

    /// Sets the terminal size (builder pattern).
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.resize(width, height);
        self
    }

    #[must_use]
    pub const fn container(&self) -> &JobSetsContainer {
        &self.container
    }

    /// Row and column under the keyboard cursor.
    #[must_use]
    pub const fn cursor(&self) -> (usize, ColumnKey) {
        (self.cursor_row, self.cursor_column)
    }

    #[must_use]
    pub const fn window(&self) -> &ScrollWindow {
        &self.window
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    #[must_use]
    pub const fn mouse_enabled(&self) -> bool {
        self.mouse
    }

    /// The last job set opened during the session.
    #[must_use]
    pub const fn last_navigation(&self) -> Option<&NavigationTarget> {
        self.last_navigation.as_ref()
    }

    fn table_height(&self) -> usize {
        self.height.saturating_sub(STATUS_HEIGHT)
    }

    fn page(&self) -> usize {
        rows_per_page(
            self.metrics.row_height,
            self.table_height().saturating_sub(self.metrics.header_height),
        )
        .max(1)
    }

    fn row_count(&self) -> usize {
        self.container.job_sets().len()
    }

    /// The table for the current frame.
    #[must_use]
    pub fn table(&self) -> JobSetTable<'_> {
        let table = JobSetTable::new(self.container.props(self.width, self.table_height()))
            .with_metrics(self.metrics)
            .with_styles(self.styles);
        if self.row_count() > 0 {
            table.with_cursor(self.cursor_row, self.cursor_column)
        } else {
            table
        }
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Handles one terminal event. Returns `true` if the frame changed.
    pub fn update(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let name = key_name(key);
                trace!(key = %name, "key");
                self.keymap
                    .action(&name)
                    .is_some_and(|action| self.perform(action))
            }
            Event::Mouse(mouse) if self.mouse => self.pointer(*mouse),
            Event::Resize(width, height) => {
                self.resize(usize::from(*width), usize::from(*height));
                true
            }
            _ => false,
        }
    }

    /// Updates the viewport size.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        let (rows, page) = (self.row_count(), self.page());
        self.window.scroll_to(self.cursor_row, rows, page);
        debug!(width, height, "resized");
    }

    fn pointer(&mut self, event: MouseEvent) -> bool {
        let event = from_crossterm_mouse(event);
        let (rows, page) = (self.row_count(), self.page());
        if event.is_wheel() {
            return match event.button {
                PointerButton::WheelDown => {
                    self.window.scroll_down(self.window.wheel_delta, rows, page);
                    true
                }
                PointerButton::WheelUp => {
                    self.window.scroll_up(self.window.wheel_delta);
                    true
                }
                _ => false,
            };
        }
        if !event.is_left_press() {
            return false;
        }

        let hit = self.table().hit_test(event.x, event.y, &self.window);
        match hit {
            Some(Hit::RowCheckbox(index)) => self.cursor_row = index,
            Some(Hit::Cell { index, column }) => {
                self.cursor_row = index;
                self.cursor_column = column;
            }
            _ => {}
        }
        let mut intents = Vec::new();
        self.table().handle_pointer(&event, &self.window, &mut intents);
        trace!(%event, emitted = intents.len(), "pointer");
        self.apply(intents);
        true
    }

    fn perform(&mut self, action: Action) -> bool {
        let (rows, page) = (self.row_count(), self.page());
        let step = isize::try_from(page).unwrap_or(isize::MAX);
        match action {
            Action::Up => self.move_cursor(-1),
            Action::Down => self.move_cursor(1),
            Action::PageUp => self.move_cursor(-step),
            Action::PageDown => self.move_cursor(step),
            Action::GotoTop => self.move_cursor(isize::MIN),
            Action::GotoBottom => self.move_cursor(isize::MAX),
            Action::Left => self.move_column(false),
            Action::Right => self.move_column(true),
            Action::Toggle | Action::RangeSelect => {
                let shift = action == Action::RangeSelect;
                let mut intents = Vec::new();
                if let Some(row) = self.table().row(self.cursor_row) {
                    row.toggle(shift, &mut intents);
                }
                self.apply(intents);
            }
            Action::ToggleAll => {
                let mut intents = Vec::new();
                self.table().header().click(&mut intents);
                self.apply(intents);
            }
            Action::Sort => {
                let mut intents = Vec::new();
                self.table().sort_cell().activate(&mut intents);
                self.apply(intents);
            }
            Action::Activate => {
                let hit = Hit::Cell {
                    index: self.cursor_row,
                    column: self.cursor_column,
                };
                let mut intents = Vec::new();
                if !self.table().activate(hit, false, &mut intents) {
                    self.status = Some("nothing to open here".to_string());
                }
                self.apply(intents);
            }
            Action::Quit => {
                info!("quit requested");
                self.quit = true;
            }
        }
        self.window.scroll_to(self.cursor_row, rows, page);
        true
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = self.row_count().saturating_sub(1);
        self.cursor_row = self.cursor_row.saturating_add_signed(delta).min(last);
    }

    fn move_column(&mut self, forward: bool) {
        let layout = self.table().layout();
        let visible: Vec<ColumnKey> = ColumnKey::ALL
            .into_iter()
            .filter(|&key| layout.cells(key) > 0)
            .collect();
        let Some(position) = visible.iter().position(|&key| key == self.cursor_column) else {
            if let Some(&first) = visible.first() {
                self.cursor_column = first;
            }
            return;
        };
        let next = if forward {
            (position + 1).min(visible.len() - 1)
        } else {
            position.saturating_sub(1)
        };
        self.cursor_column = visible[next];
    }

    fn apply(&mut self, intents: Vec<Intent>) {
        for intent in intents {
            debug!(?intent, "applying intent");
            intent.apply(&mut self.container);
        }
        if let Some(target) = self.container.take_navigation() {
            info!(route = %target, "job set opened");
            self.status = Some(format!("open {target}"));
            if self.print_navigation {
                self.quit = true;
            }
            self.last_navigation = Some(target);
        }
        self.cursor_row = self.cursor_row.min(self.row_count().saturating_sub(1));
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    fn status_line(&self) -> String {
        let order = if self.container.newest_first() {
            "newest first"
        } else {
            "oldest first"
        };
        let summary = format!(
            "{} job sets • {} selected • {order}",
            self.row_count(),
            self.container.selected().len()
        );
        let detail = self
            .status
            .clone()
            .unwrap_or_else(|| self.keymap.short_help());
        clip(&format!("{summary} │ {detail}"), self.width)
    }

    /// Renders the frame: table lines, padded to the table height, then the
    /// status bar.
    #[must_use]
    pub fn view(&self) -> String {
        let mut lines = self.table().lines(&self.window);
        lines.resize(self.table_height(), String::new());
        if self.height > 0 {
            lines.push(self.status_line());
        }
        lines.join("\r\n")
    }
}

/// Cuts `s` to at most `width` terminal cells.
fn clip(s: &str, width: usize) -> String {
    let mut used = 0;
    s.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}
