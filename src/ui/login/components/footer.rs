//! Login footer component
//!
//! Renders key hints and the support contact line

use crate::consts::form_consts::{colors, text};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Render the key hint line.
pub fn render_hints(f: &mut Frame, area: Rect) {
    let hints = Paragraph::new(text::KEY_HINTS)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, area);
}

/// Render the static contact footer.
pub fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(text::FOOTER)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::FOOTER))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::BORDER)),
        );
    f.render_widget(footer, area);
}
