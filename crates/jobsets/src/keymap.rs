//! Keybindings.
//!
//! Keys are matched by name (`"up"`, `"k"`, `"ctrl+c"`, `"shift+space"`).
//! [`key_name`] turns a crossterm key event into that name.
//!
//! # Example
//!
//! ```rust
//! use jobsets::keymap::{Action, KeyMap};
//!
//! let keymap = KeyMap::default();
//! assert_eq!(keymap.action("j"), Some(Action::Down));
//! assert_eq!(keymap.action("x"), None);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Help information for a keybinding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display in help text (e.g., "↑/k").
    pub key: String,
    /// Description of what the binding does.
    pub desc: String,
}

/// A keybinding with associated help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled if it is not disabled and has at least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether `key` triggers this binding.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.enabled() && self.keys.iter().any(|k| k == key)
    }
}

/// Names a key event the way bindings spell keys.
#[must_use]
pub fn key_name(event: &KeyEvent) -> String {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    let base = match event.code {
        KeyCode::Char(' ') if shift => "shift+space".to_string(),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) if ctrl => format!("ctrl+{}", c.to_ascii_lowercase()),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => String::new(),
    };
    if alt && !base.is_empty() {
        format!("alt+{base}")
    } else {
        base
    }
}

/// What a key does in the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    GotoTop,
    GotoBottom,
    Toggle,
    RangeSelect,
    ToggleAll,
    Sort,
    Activate,
    Quit,
}

/// Keybindings for the table view.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub up: Binding,
    pub down: Binding,
    pub left: Binding,
    pub right: Binding,
    pub page_up: Binding,
    pub page_down: Binding,
    pub goto_top: Binding,
    pub goto_bottom: Binding,
    /// Toggle the cursor row.
    pub toggle: Binding,
    /// Select from the last toggled row to the cursor row.
    pub range_select: Binding,
    /// Header checkbox.
    pub toggle_all: Binding,
    /// Flip the submission-time order.
    pub sort: Binding,
    /// Open the state count under the cursor.
    pub activate: Binding,
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            up: Binding::new().keys(&["up", "k"]).help("↑/k", "up"),
            down: Binding::new().keys(&["down", "j"]).help("↓/j", "down"),
            left: Binding::new().keys(&["left", "h"]).help("←/h", "left"),
            right: Binding::new().keys(&["right", "l"]).help("→/l", "right"),
            page_up: Binding::new().keys(&["pgup", "b"]).help("pgup", "page up"),
            page_down: Binding::new()
                .keys(&["pgdown", "f"])
                .help("pgdn", "page down"),
            goto_top: Binding::new().keys(&["home", "g"]).help("g", "top"),
            goto_bottom: Binding::new().keys(&["end", "G"]).help("G", "bottom"),
            toggle: Binding::new().keys(&["space", "x"]).help("space", "select"),
            range_select: Binding::new()
                .keys(&["V", "shift+space"])
                .help("V", "select range"),
            toggle_all: Binding::new().keys(&["a"]).help("a", "select all"),
            sort: Binding::new().keys(&["o"]).help("o", "order"),
            activate: Binding::new().keys(&["enter"]).help("enter", "open"),
            quit: Binding::new()
                .keys(&["q", "esc", "ctrl+c"])
                .help("q", "quit"),
        }
    }
}

impl KeyMap {
    fn bindings(&self) -> [(&Binding, Action); 14] {
        [
            (&self.up, Action::Up),
            (&self.down, Action::Down),
            (&self.left, Action::Left),
            (&self.right, Action::Right),
            (&self.page_up, Action::PageUp),
            (&self.page_down, Action::PageDown),
            (&self.goto_top, Action::GotoTop),
            (&self.goto_bottom, Action::GotoBottom),
            (&self.toggle, Action::Toggle),
            (&self.range_select, Action::RangeSelect),
            (&self.toggle_all, Action::ToggleAll),
            (&self.sort, Action::Sort),
            (&self.activate, Action::Activate),
            (&self.quit, Action::Quit),
        ]
    }

    /// The action bound to `key`, if any.
    #[must_use]
    pub fn action(&self, key: &str) -> Option<Action> {
        self.bindings()
            .into_iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, action)| action)
    }

    /// One-line help for the enabled bindings.
    #[must_use]
    pub fn short_help(&self) -> String {
        let items: Vec<String> = [
            &self.up,
            &self.down,
            &self.toggle,
            &self.range_select,
            &self.toggle_all,
            &self.sort,
            &self.activate,
            &self.quit,
        ]
        .into_iter()
        .filter(|b| b.enabled())
        .map(|b| format!("{} {}", b.get_help().key, b.get_help().desc))
        .collect();
        items.join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> String {
        key_name(&KeyEvent::new(code, modifiers))
    }

    #[test]
    fn names_keys() {
        assert_eq!(key(KeyCode::Char('k'), KeyModifiers::NONE), "k");
        assert_eq!(key(KeyCode::Char('G'), KeyModifiers::SHIFT), "G");
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), "ctrl+c");
        assert_eq!(key(KeyCode::Char(' '), KeyModifiers::NONE), "space");
        assert_eq!(key(KeyCode::Char(' '), KeyModifiers::SHIFT), "shift+space");
        assert_eq!(key(KeyCode::PageDown, KeyModifiers::NONE), "pgdown");
        assert_eq!(key(KeyCode::Up, KeyModifiers::ALT), "alt+up");
    }

    #[test]
    fn default_actions() {
        let keymap = KeyMap::default();
        assert_eq!(keymap.action("up"), Some(Action::Up));
        assert_eq!(keymap.action("l"), Some(Action::Right));
        assert_eq!(keymap.action("space"), Some(Action::Toggle));
        assert_eq!(keymap.action("shift+space"), Some(Action::RangeSelect));
        assert_eq!(keymap.action("a"), Some(Action::ToggleAll));
        assert_eq!(keymap.action("o"), Some(Action::Sort));
        assert_eq!(keymap.action("enter"), Some(Action::Activate));
        assert_eq!(keymap.action("ctrl+c"), Some(Action::Quit));
        assert_eq!(keymap.action("z"), None);
    }

    #[test]
    fn disabled_binding_does_not_match() {
        let mut keymap = KeyMap::default();
        keymap.sort.enable(false);
        assert_eq!(keymap.action("o"), None);
        assert!(!keymap.short_help().contains("order"));
    }

    #[test]
    fn short_help_lists_bindings() {
        let help = KeyMap::default().short_help();
        assert!(help.starts_with("↑/k up"));
        assert!(help.contains("enter open"));
    }
}
