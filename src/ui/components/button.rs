//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
fn render_button(frame: &mut Frame, area: Rect, content: &str, border: Color, text_style: Style) {
    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    frame.render_widget(paragraph.block(block), area);
}

/// Render a sidebar button. `is_current` marks the form type in use;
/// `is_selected` marks the cursor.
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_current: bool,
) {
    let border = if is_selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let text_style = match (is_selected, is_current) {
        (true, _) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::Green),
        (false, false) => Style::default(),
    };

    let marker = if is_current { "●" } else { " " };
    render_button(frame, area, &format!("{marker} {label}"), border, text_style);
}

/// Render an action button; `accent` colors the label when not selected
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    accent: Color,
) {
    let border = if is_selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };

    render_button(frame, area, label, border, text_style);
}
