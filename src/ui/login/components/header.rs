//! Login header component
//!
//! Renders the form title

use super::text_style;
use crate::consts::form_consts::text;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::Modifier;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the title bar.
pub fn render_header(f: &mut Frame, area: Rect, with_background_color: bool) {
    let title = Paragraph::new(text::TITLE)
        .alignment(Alignment::Center)
        .style(text_style(with_background_color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, area);
}
