//! Login form component modules
//!
//! Contains all individual rendering components

pub mod feedback;
pub mod fields;
pub mod footer;
pub mod header;
pub mod indicator;

use crate::consts::form_consts::colors;
use ratatui::prelude::Style;

/// Base style for plain text on the panel.
pub fn text_style(with_background_color: bool) -> Style {
    if with_background_color {
        Style::default().fg(colors::TEXT).bg(colors::BACKGROUND)
    } else {
        Style::default()
    }
}
