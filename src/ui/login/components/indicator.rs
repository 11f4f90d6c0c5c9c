//! Presence indicator component
//!
//! A neutral outer ring around a filled circle colored by [`Presence`].

use super::super::state::Presence;
use crate::consts::form_consts::{colors, indicator};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Points};

/// Render the indicator. `background` paints the canvas behind the circles.
pub fn render_indicator(
    f: &mut Frame,
    area: Rect,
    presence: Presence,
    background: Option<Color>,
) {
    let fill = presence.color();

    let mut canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-indicator::BOUND, indicator::BOUND])
        .y_bounds([-indicator::BOUND, indicator::BOUND])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: indicator::OUTER_RADIUS,
                color: colors::BORDER,
            });
            ctx.layer();

            // Concentric rings down to the center fill the inner circle.
            let mut radius = indicator::INNER_RADIUS;
            while radius > 0.0 {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius,
                    color: fill,
                });
                radius -= indicator::FILL_STEP;
            }
            ctx.draw(&Points {
                coords: &[(0.0, 0.0)],
                color: fill,
            });
        });

    if let Some(bg) = background {
        canvas = canvas.background_color(bg);
    }

    f.render_widget(canvas, area);
}
