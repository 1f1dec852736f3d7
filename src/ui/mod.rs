//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submissions;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_sidebar(frame, screen.sidebar, app);
    forms::draw_form(frame, screen.form, app);
    submissions::draw(frame, screen.submissions, app);
    layout::draw_status_bar(frame, screen.status_bar, app);

    // Modal overlays, error on top
    if let Some(action) = &app.state.pending_delete {
        components::render_confirm_dialog(frame, action);
    }
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.queued_errors());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{FormType, PendingDeleteAction, SchemaRegistry};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        App::new(TuiConfig::default(), SchemaRegistry::builtin().unwrap())
    }

    /// Render `app` and return the screen as one string per row
    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(200, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_screen_lists_form_types() {
        let screen = render(&app());
        for form_type in FormType::ALL {
            assert!(screen.contains(form_type.label()));
        }
        assert!(screen.contains("Select a form type from the sidebar."));
        assert!(screen.contains("No submissions yet."));
    }

    #[test]
    fn test_active_form_shows_fields_and_progress() {
        let mut app = app();
        app.engine.select(FormType::User);
        app.engine.set_field_value("firstName", "Ann").unwrap();
        let screen = render(&app);
        assert!(screen.contains("First Name *"));
        assert!(screen.contains("Age"));
        assert!(screen.contains("Ann"));
        assert!(screen.contains("50% Completed"));
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_password_is_masked_on_screen() {
        let mut app = app();
        app.engine.select(FormType::Payment);
        app.engine.set_field_value("cvv", "987").unwrap();
        let screen = render(&app);
        assert!(!screen.contains("987"));
        assert!(screen.contains("•••"));
    }

    #[test]
    fn test_rejected_submit_shows_message() {
        let mut app = app();
        app.engine.select(FormType::User);
        app.engine.submit().unwrap_err();
        let screen = render(&app);
        assert!(screen.contains("Please fill out the First Name, Last Name"));
    }

    #[test]
    fn test_submission_appears_with_preview() {
        let mut app = app();
        app.engine.select(FormType::User);
        app.engine.set_field_value("firstName", "Ann").unwrap();
        app.engine.set_field_value("lastName", "Lee").unwrap();
        app.engine.submit().unwrap();
        let screen = render(&app);
        assert!(screen.contains("Submissions (1)"));
        assert!(screen.contains("User Information · Ann Lee"));
        assert!(screen.contains("\"firstName\": \"Ann\""));
    }

    #[test]
    fn test_dialogs_render_over_screen() {
        let mut app = app();
        app.engine.select(FormType::User);
        app.engine.set_field_value("firstName", "Ann").unwrap();
        app.engine.set_field_value("lastName", "Lee").unwrap();
        app.engine.submit().unwrap();
        app.state.pending_delete = Some(PendingDeleteAction {
            submission_id: app.engine.submissions()[0].id,
            entry_number: 1,
            entry_display: "User Information · Ann Lee".to_string(),
            selected_option: false,
        });
        assert!(render(&app).contains("Confirm Delete"));

        app.push_error("Clipboard unavailable");
        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Clipboard unavailable"));
        assert!(!screen.contains("more)"));

        app.push_error("Second failure");
        assert!(render(&app).contains("Error (+1 more)"));
    }
}
