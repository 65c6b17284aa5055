//! Pointer input.
//!
//! Terminal mouse events are translated into [`PointerEvent`]s so the table
//! can route clicks without depending on how the host reads its input.

use std::fmt;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// A pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Column, 0-indexed, relative to the table origin.
    pub x: u16,
    /// Row, 0-indexed, relative to the table origin.
    pub y: u16,
    /// Whether Shift was held.
    pub shift: bool,
    /// Whether Ctrl was held.
    pub ctrl: bool,
    /// What happened.
    pub action: PointerAction,
    /// The button involved.
    pub button: PointerButton,
}

impl PointerEvent {
    /// A plain left-button press at `(x, y)`.
    #[must_use]
    pub const fn click(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            shift: false,
            ctrl: false,
            action: PointerAction::Press,
            button: PointerButton::Left,
        }
    }

    /// A shift-held left-button press at `(x, y)`.
    #[must_use]
    pub const fn shift_click(x: u16, y: u16) -> Self {
        Self {
            shift: true,
            ..Self::click(x, y)
        }
    }

    /// Whether this is a left-button press, the only event that activates cells.
    #[must_use]
    pub fn is_left_press(&self) -> bool {
        self.action == PointerAction::Press && self.button == PointerButton::Left
    }

    /// Whether this is a wheel tick.
    #[must_use]
    pub fn is_wheel(&self) -> bool {
        matches!(
            self.button,
            PointerButton::WheelUp
                | PointerButton::WheelDown
                | PointerButton::WheelLeft
                | PointerButton::WheelRight
        )
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.shift {
            write!(f, "shift+")?;
        }
        write!(f, "{} {} @ {},{}", self.button, self.action, self.x, self.y)
    }
}

/// Pointer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerAction {
    #[default]
    Press,
    Release,
    Motion,
}

impl fmt::Display for PointerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Press => "press",
            Self::Release => "release",
            Self::Motion => "motion",
        })
    }
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    #[default]
    None,
    Left,
    Middle,
    Right,
    WheelUp,
    WheelDown,
    WheelLeft,
    WheelRight,
}

impl fmt::Display for PointerButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::WheelUp => "wheel up",
            Self::WheelDown => "wheel down",
            Self::WheelLeft => "wheel left",
            Self::WheelRight => "wheel right",
        })
    }
}

/// Converts a crossterm mouse event.
#[must_use]
pub fn from_crossterm_mouse(event: MouseEvent) -> PointerEvent {
    let action = match event.kind {
        MouseEventKind::Up(_) => PointerAction::Release,
        MouseEventKind::Drag(_) | MouseEventKind::Moved => PointerAction::Motion,
        MouseEventKind::Down(_)
        | MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => PointerAction::Press,
    };

    let button = match event.kind {
        MouseEventKind::Down(b) | MouseEventKind::Up(b) | MouseEventKind::Drag(b) => match b {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
        },
        MouseEventKind::ScrollUp => PointerButton::WheelUp,
        MouseEventKind::ScrollDown => PointerButton::WheelDown,
        MouseEventKind::ScrollLeft => PointerButton::WheelLeft,
        MouseEventKind::ScrollRight => PointerButton::WheelRight,
        MouseEventKind::Moved => PointerButton::None,
    };

    PointerEvent {
        x: event.column,
        y: event.row,
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        action,
        button,
    }
}
