//! Input field and button components

use super::text_style;
use crate::consts::form_consts::{colors, text};
use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render a field label.
pub fn render_label(f: &mut Frame, area: Rect, label: &str, with_background_color: bool) {
    let paragraph = Paragraph::new(label).style(text_style(with_background_color));
    f.render_widget(paragraph, area);
}

/// Render a bordered single-line input showing `value`.
///
/// Text wider than the box scrolls so the end stays visible. Returns where the
/// cursor belongs when this field has focus.
pub fn render_input(
    f: &mut Frame,
    area: Rect,
    value: &str,
    focused: bool,
    with_background_color: bool,
) -> Position {
    let border_color = if focused { colors::FOCUS } else { colors::BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let visible = visible_tail(value, inner_width.saturating_sub(1));
    let cursor_x = area.x + 1 + visible.chars().count() as u16;

    let paragraph = Paragraph::new(visible)
        .style(text_style(with_background_color))
        .block(block);
    f.render_widget(paragraph, area);

    Position::new(cursor_x, area.y + 1)
}

/// Render the submit button.
pub fn render_button(f: &mut Frame, area: Rect, focused: bool) {
    let style = Style::default()
        .fg(colors::BUTTON_FG)
        .bg(colors::BUTTON_BG)
        .add_modifier(Modifier::BOLD);
    let (border_type, border_color) = if focused {
        (BorderType::Thick, colors::FOCUS)
    } else {
        (BorderType::Plain, colors::BUTTON_BG)
    };

    let button = Paragraph::new(text::SUBMIT_LABEL)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(style.fg(border_color)),
        );
    f.render_widget(button, area);
}

/// Masks a secret with one `mask` per character.
pub fn mask(secret: &str, mask: char) -> String {
    std::iter::repeat_n(mask, secret.chars().count()).collect()
}

/// The last `width` characters of `value`.
fn visible_tail(value: &str, width: usize) -> String {
    let len = value.chars().count();
    value.chars().skip(len.saturating_sub(width)).collect()
}
