//! Input bindings
//!
//! Maps raw terminal events onto the small set of events the login form reacts to.
//! What an event does depends on focus; that is decided by [`crate::ui::App`].

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum FormEvent {
    /// A printable character typed into the focused control.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    FocusNext,
    FocusPrevious,
    /// Enter: submit, or advance from the identifier field.
    Activate,
    /// Left mouse button pressed at a terminal cell.
    Click(Position),
    Quit,
}

/// Translates a key event. Key releases and unbound keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<FormEvent> {
    // Skip events that are not KeyEventKind::Press
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // AltGr arrives as CONTROL | ALT on Windows and produces printable characters.
    if key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char(c) => Some(FormEvent::Input(c)),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(FormEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(FormEvent::Quit),
        KeyCode::Enter => Some(FormEvent::Activate),
        KeyCode::Tab | KeyCode::Down => Some(FormEvent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(FormEvent::FocusPrevious),
        KeyCode::Backspace => Some(FormEvent::Backspace),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(FormEvent::Input(c)),
        _ => None,
    }
}

/// Translates a mouse event. Only left button presses are bound.
pub fn map_mouse(mouse: MouseEvent) -> Option<FormEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(FormEvent::Click(Position::new(mouse.column, mouse.row)))
        }
        _ => None,
    }
}
