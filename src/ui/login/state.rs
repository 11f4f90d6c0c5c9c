//! Login form state
//!
//! The live field contents, focus and the derived presence indicator.

use crate::consts::form_consts::colors;
use ratatui::style::Color;

/// Current text of the two inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub identifier: String,
    pub secret: String,
}

/// Control receiving keystrokes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, strum::Display)]
pub enum Focus {
    #[default]
    Identifier,
    Secret,
    Submit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Identifier => Focus::Secret,
            Focus::Secret => Focus::Submit,
            Focus::Submit => Focus::Identifier,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Identifier => Focus::Submit,
            Focus::Secret => Focus::Identifier,
            Focus::Submit => Focus::Secret,
        }
    }
}

/// Whether the identifier field has content. Says nothing about validity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Presence {
    Filled,
    Empty,
}

impl Presence {
    pub fn of(identifier: &str) -> Self {
        if identifier.trim().is_empty() {
            Presence::Empty
        } else {
            Presence::Filled
        }
    }

    /// Inner fill color of the indicator.
    pub fn color(&self) -> Color {
        match self {
            Presence::Filled => colors::SUCCESS,
            Presence::Empty => colors::WARNING,
        }
    }
}
