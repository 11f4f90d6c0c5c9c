//! Form geometry
//!
//! Rendering and mouse hit-testing share this layout so a click lands on
//! exactly what was drawn.

use crate::consts::form_consts::panel;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub panel: Rect,
    pub title: Rect,
    pub id_label: Rect,
    pub id_field: Rect,
    pub indicator: Rect,
    pub password_label: Rect,
    pub password_field: Rect,
    pub button: Rect,
    pub feedback: Rect,
    pub hints: Rect,
    pub footer: Rect,
}

/// Which control, if any, sits at a terminal cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HitTarget {
    IdField,
    PasswordField,
    Button,
}

impl FormLayout {
    /// Places the fixed-size panel in the middle of `area`.
    ///
    /// Returns `None` when `area` cannot hold the panel.
    pub fn compute(area: Rect) -> Option<Self> {
        if area.width < panel::WIDTH || area.height < panel::HEIGHT {
            return None;
        }

        let [panel_row] = Layout::vertical([Constraint::Length(panel::HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [panel] = Layout::horizontal([Constraint::Length(panel::WIDTH)])
            .flex(Flex::Center)
            .areas(panel_row);

        // Inside the outer border
        let inner = Rect {
            x: panel.x + 1,
            y: panel.y + 1,
            width: panel.width - 2,
            height: panel.height - 2,
        };

        let [title, _, id_row, password_row, _, button_row, _, feedback, _, hints, footer] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .areas(inner);

        let (id_label, id_field, indicator) = field_row(id_row);
        let (password_label, password_field, _) = field_row(password_row);

        let [button] = Layout::horizontal([Constraint::Length(16)])
            .flex(Flex::Center)
            .areas(button_row);

        Some(Self {
            panel,
            title,
            id_label,
            id_field,
            indicator,
            password_label,
            password_field,
            button,
            feedback,
            hints,
            footer,
        })
    }

    pub fn hit(&self, position: Position) -> Option<HitTarget> {
        if self.button.contains(position) {
            Some(HitTarget::Button)
        } else if self.id_field.contains(position) {
            Some(HitTarget::IdField)
        } else if self.password_field.contains(position) {
            Some(HitTarget::PasswordField)
        } else {
            None
        }
    }
}

/// Splits a three-row field line into label, input box and indicator slot.
fn field_row(row: Rect) -> (Rect, Rect, Rect) {
    let [label_col, field, _, indicator] = Layout::horizontal([
        Constraint::Length(14),
        Constraint::Length(32),
        Constraint::Length(2),
        Constraint::Length(6),
    ])
    .flex(Flex::Center)
    .areas(row);

    // Label text sits on the middle line, level with the input text.
    let label = Rect {
        y: label_col.y + 1,
        height: 1,
        ..label_col
    };
    (label, field, indicator)
}
