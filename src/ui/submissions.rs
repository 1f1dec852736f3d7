//! Submitted entries: list and JSON preview

use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the submissions list with a preview of the selected entry below it
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_list(frame, chunks[0], app);
    draw_preview(frame, chunks[1], app);
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.focus == Focus::Submissions;
    let submissions = app.engine.submissions();

    let block = Block::default()
        .title(format!(" Submissions ({}) ", submissions.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    if submissions.is_empty() {
        let empty = Paragraph::new("No submissions yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = submissions
        .iter()
        .enumerate()
        .map(|(idx, submission)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<3}", idx + 1), Style::default().fg(Color::Cyan)),
                Span::raw(app.submission_summary(submission)),
                Span::styled(
                    format!("  {}", submission.submitted_at.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let highlight = if focused {
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▸ ");

    // ListState keeps the selected entry scrolled into view
    let mut list_state = ListState::default().with_selected(Some(app.state.selected_submission));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_preview(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Submitted Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(submission) = app.engine.submissions().get(app.state.selected_submission) else {
        frame.render_widget(block, area);
        return;
    };

    let json = app
        .preview_json(submission)
        .unwrap_or_else(|err| format!("<unprintable: {err}>"));
    let mut lines = vec![Line::from(Span::styled(
        format!("{} · {}", submission.form_type, submission.id.short()),
        Style::default().fg(Color::Yellow),
    ))];
    lines.extend(json.lines().map(|l| Line::from(l.to_string())));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
