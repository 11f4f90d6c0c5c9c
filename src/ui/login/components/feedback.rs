//! Feedback message component

use crate::validation::LoginOutcome;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::Style;
use ratatui::widgets::Paragraph;

/// Render the outcome of the last submit. Nothing is drawn before the first one.
pub fn render_feedback(f: &mut Frame, area: Rect, feedback: Option<LoginOutcome>) {
    let Some(outcome) = feedback else {
        return;
    };

    let message = Paragraph::new(outcome.message())
        .alignment(Alignment::Center)
        .style(Style::default().fg(outcome.color()));
    f.render_widget(message, area);
}
