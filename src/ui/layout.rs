//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 26;

/// Areas of the main screen
pub struct ScreenLayout {
    pub sidebar: Rect,
    pub form: Rect,
    pub submissions: Rect,
    pub status_bar: Rect,
}

/// Split the frame into sidebar, form, submissions and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Form types
            Constraint::Percentage(60),        // Form
            Constraint::Min(0),                // Submissions
        ])
        .split(rows[0]);

    ScreenLayout {
        sidebar: columns[0],
        form: columns[1],
        submissions: columns[2],
        status_bar: rows[1],
    }
}

/// Draw the form type sidebar
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.focus == Focus::FormTypes;
    let block = Block::default()
        .title(" Select Form Type ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let schemas = app.engine.session().registry().schemas();
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(schemas.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let active = app.engine.session().active_form_type();
    for (idx, schema) in schemas.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            schema.form_type.label(),
            focused && app.state.form_type_index == idx,
            active == Some(schema.form_type),
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.focus.label()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_focus_hints(app.state.focus),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused panel
fn get_focus_hints(focus: Focus) -> String {
    match focus {
        Focus::FormTypes => "j/k:nav  Enter:open  Tab:form  s:submissions  q:quit".to_string(),
        Focus::Form => format!(
            "Tab:next  ←/→:choose  {}:submit  Esc:form types",
            crate::platform::SUBMIT_SHORTCUT
        ),
        Focus::Submissions => format!(
            "j/k:nav  e:edit  d:delete  {}  Esc:back",
            crate::platform::COPY_HINT
        ),
    }
}
