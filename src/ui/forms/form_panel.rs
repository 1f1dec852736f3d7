//! Active form rendering: fields, progress and the submit button

use super::field_renderer::{draw_field, FieldDisplay};
use crate::app::App;
use crate::state::{Focus, FormSchema, StatusMessage};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Draw the form panel for the active form type
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.focus == Focus::Form;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let Some(schema) = app.engine.session().schema() else {
        draw_placeholder(frame, area);
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", schema.form_type))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = schema.fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(3)); // Progress
    constraints.push(Constraint::Length(2)); // Status message
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    draw_fields(frame, &chunks, schema, app, focused);

    let n = schema.len();
    draw_progress(frame, chunks[n], app.engine.session().progress_percent());
    draw_status(frame, chunks[n + 1], app.engine.session().status());

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[n + 2])[0];
    render_action_button(
        frame,
        button_area,
        "Submit",
        focused && app.state.is_submit_active(n),
        Color::Green,
    );
}

fn draw_fields(frame: &mut Frame, chunks: &[Rect], schema: &FormSchema, app: &App, focused: bool) {
    let session = app.engine.session();
    for (idx, field) in schema.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            field,
            session.value(&field.name),
            FieldDisplay {
                is_active: focused && app.state.active_field == idx,
                is_flagged: session.is_flagged(&field.name),
                mask_passwords: app.config.mask_passwords(),
            },
        );
    }
}

fn draw_progress(frame: &mut Frame, area: Rect, percent: u16) {
    let color = if percent >= 100 {
        Color::Green
    } else {
        Color::Cyan
    };
    let gauge = Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .percent(percent.min(100))
        .label(format!("{percent}% Completed"));
    frame.render_widget(gauge, area);
}

fn draw_status(frame: &mut Frame, area: Rect, status: Option<&StatusMessage>) {
    let Some(status) = status else {
        return;
    };
    let color = if status.is_error() {
        Color::Red
    } else {
        Color::Green
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        status.text(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_placeholder(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from("Select a form type from the sidebar."),
        Line::from(""),
        Line::from(vec![
            Span::styled("j/k", Style::default().fg(Color::Cyan)),
            Span::raw(": move  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(": open form"),
        ]),
    ];
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Fill Out the Form ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
