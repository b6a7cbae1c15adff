//! Abstract input key event, independent of terminal library.
//!
//! `verse-app` never sees crossterm types: the TUI converts each terminal key
//! event into an [`InputKey`] at the boundary, which keeps the state machine
//! testable without a terminal.

/// Abstract input key event.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (digits, letters, space, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// ASCII digit typed without modifiers
    pub fn digit(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if c.is_ascii_digit() => Some(*c),
            _ => None,
        }
    }
}
