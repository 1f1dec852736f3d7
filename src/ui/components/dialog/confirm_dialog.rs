//! Confirmation dialog for deleting a submission

use super::base::{centered_rect, render_overlay, truncate};
use crate::state::PendingDeleteAction;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 11;

/// Render a confirmation dialog for a pending delete
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingDeleteAction) {
    let area = centered_rect(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    let display = truncate(&action.entry_display, (DIALOG_WIDTH - 6) as usize);

    let mut content = vec![
        Line::from(Span::styled(
            "Confirm Delete",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Delete submitted entry"),
        Line::from(vec![
            Span::styled(
                format!("#{} ", action.entry_number),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(display),
        ]),
        Line::from(""),
    ];

    // Cancel first so an accidental Enter keeps the entry
    for (is_delete, label, color) in [(false, "Cancel", Color::White), (true, "Delete", Color::Red)]
    {
        let is_selected = action.selected_option == is_delete;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        content.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    render_overlay(frame, area, content, Color::Red);
}
