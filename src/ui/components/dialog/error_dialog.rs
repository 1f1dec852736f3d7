//! Error dialog for failures surfaced from the form engine or clipboard

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the front of the error queue, noting how many more are waiting
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, queued: usize) {
    let title = match queued {
        0 => "Error".to_string(),
        n => format!("Error (+{n} more)"),
    };
    let next = if queued > 0 { " for next" } else { " to dismiss" };

    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key),
        Span::raw("/"),
        Span::styled("Esc", key),
        Span::raw(next),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            color: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
