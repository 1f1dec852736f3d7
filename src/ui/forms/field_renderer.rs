//! Field rendering utilities for forms

use crate::state::FieldDescriptor;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How a field should be drawn besides its value
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldDisplay {
    pub is_active: bool,
    /// Reported missing by the last rejected submit
    pub is_flagged: bool,
    pub mask_passwords: bool,
}

/// Title of a field box: label, required marker and input hint
pub fn field_title(field: &FieldDescriptor) -> String {
    let required = if field.required { " *" } else { "" };
    match field.kind.hint() {
        Some(hint) => format!(" {}{} ({}) ", field.label, required, hint),
        None => format!(" {}{} ", field.label, required),
    }
}

/// Draw one form field from its descriptor and current value
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldDescriptor,
    value: &str,
    display: FieldDisplay,
) {
    let border_color = if display.is_active {
        Color::Cyan
    } else if display.is_flagged {
        Color::Red
    } else {
        Color::DarkGray
    };

    let value_style = if display.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let placeholder = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut spans = Vec::new();
    if field.is_dropdown() {
        let arrows = Style::default().fg(if display.is_active {
            Color::Cyan
        } else {
            Color::DarkGray
        });
        spans.push(Span::styled("‹ ", arrows));
        if value.is_empty() {
            spans.push(Span::styled("Select...", placeholder));
        } else {
            spans.push(Span::styled(value.to_string(), value_style));
        }
        spans.push(Span::styled(" ›", arrows));
    } else if value.is_empty() && !display.is_active {
        spans.push(Span::styled("(empty)", placeholder));
    } else {
        spans.push(Span::styled(
            field.display_value(value, display.mask_passwords),
            value_style,
        ));
        if display.is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
