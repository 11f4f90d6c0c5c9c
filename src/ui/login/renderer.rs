//! Login form main renderer

use super::components::{feedback, fields, footer, header, indicator};
use super::layout::FormLayout;
use super::state::Focus;
use crate::consts::form_consts::{colors, text};
use crate::ui::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_login(f: &mut Frame, app: &App) {
    let Some(layout) = FormLayout::compute(f.area()) else {
        render_too_small(f);
        return;
    };

    let config = app.ui_config();
    let with_bg = config.with_background_color;

    let mut panel = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER));
    if with_bg {
        panel = panel.style(Style::default().bg(colors::BACKGROUND));
    }
    f.render_widget(panel, layout.panel);

    header::render_header(f, layout.title, with_bg);

    let form = app.form();
    let focus = app.focus();

    fields::render_label(f, layout.id_label, text::ID_LABEL, with_bg);
    let id_cursor = fields::render_input(
        f,
        layout.id_field,
        &form.identifier,
        focus == Focus::Identifier,
        with_bg,
    );
    let background = with_bg.then_some(colors::BACKGROUND);
    indicator::render_indicator(f, layout.indicator, app.presence(), background);

    fields::render_label(f, layout.password_label, text::PASSWORD_LABEL, with_bg);
    let masked = fields::mask(&form.secret, config.mask_char);
    let password_cursor = fields::render_input(
        f,
        layout.password_field,
        &masked,
        focus == Focus::Secret,
        with_bg,
    );

    fields::render_button(f, layout.button, focus == Focus::Submit);
    feedback::render_feedback(f, layout.feedback, app.feedback());
    footer::render_hints(f, layout.hints);
    footer::render_footer(f, layout.footer);

    match focus {
        Focus::Identifier => f.set_cursor_position(id_cursor),
        Focus::Secret => f.set_cursor_position(password_cursor),
        Focus::Submit => {}
    }
}

fn render_too_small(f: &mut Frame) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(f.area());
    let notice = Paragraph::new(text::TOO_SMALL)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(notice, row);
}
