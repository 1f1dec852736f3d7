//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, FieldDescriptor, FieldKind, Focus, FormEngine, FormError, FormType,
    PendingDeleteAction, SchemaRegistry, Submission,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// View state (focus, cursors, dialogs)
    pub state: AppState,
    /// Form session and submission store
    pub engine: FormEngine,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App over `registry`, preselecting the configured form type
    pub fn new(config: TuiConfig, registry: SchemaRegistry) -> Self {
        let mut app = Self {
            state: AppState::default(),
            engine: FormEngine::new(registry),
            config,
            quit: false,
        };
        if let Some(identifier) = app.config.default_form_type.clone() {
            match app.engine.select_form_type(&identifier) {
                Ok(()) => app.focus_active_form(),
                Err(err) => tracing::warn!("Ignoring default_form_type: {err}"),
            }
        }
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Number of fields in the active form (0 when none is selected)
    pub fn field_count(&self) -> usize {
        self.engine.session().schema().map_or(0, |s| s.len())
    }

    /// Descriptor of the field under the cursor, if the cursor is on a field
    pub fn active_descriptor(&self) -> Option<&FieldDescriptor> {
        self.engine
            .session()
            .schema()
            .and_then(|s| s.fields.get(self.state.active_field))
    }

    /// Short description of a submission: form type and its first filled values
    pub fn submission_summary(&self, submission: &Submission) -> String {
        let schema = self.engine.session().registry().schema(submission.form_type);
        let preview: Vec<&str> = schema
            .fields
            .iter()
            .filter(|f| f.kind != FieldKind::Password)
            .map(|f| submission.values.get(&f.name))
            .filter(|v| !v.is_empty())
            .take(2)
            .collect();
        if preview.is_empty() {
            submission.form_type.to_string()
        } else {
            format!("{} · {}", submission.form_type, preview.join(" "))
        }
    }

    /// JSON of a submission for display, with passwords masked when configured
    pub fn preview_json(&self, submission: &Submission) -> serde_json::Result<String> {
        if !self.config.mask_passwords() {
            return submission.values_json();
        }
        let schema = self.engine.session().registry().schema(submission.form_type);
        let mut shown = submission.values.clone();
        for field in schema.fields.iter().filter(|f| f.kind == FieldKind::Password) {
            if shown.is_filled(&field.name) {
                let masked = field.display_value(shown.get(&field.name), true);
                shown.set(field.name.clone(), masked);
            }
        }
        serde_json::to_string_pretty(&shown)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle delete confirmation (modal)
        if self.state.pending_delete.is_some() {
            self.handle_confirm_delete_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        // Submit works from anywhere once a form is active
        if key.code == KeyCode::Char('s')
            && key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
        {
            self.submit();
            return Ok(());
        }

        match self.state.focus {
            Focus::FormTypes => self.handle_form_types_key(key),
            Focus::Form => self.handle_form_key(key),
            Focus::Submissions => self.handle_submissions_key(key)?,
        }
        Ok(())
    }

    /// Handle keys in the form type sidebar
    fn handle_form_types_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.prev_form_type(),
            KeyCode::Down | KeyCode::Char('j') => self.state.next_form_type(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                let form_type = self.state.highlighted_form_type();
                self.select_form_type(form_type);
            }
            KeyCode::Tab if self.engine.session().schema().is_some() => {
                self.state.focus = Focus::Form;
            }
            KeyCode::Char('s') => self.focus_submissions(),
            _ => {}
        }
    }

    /// Handle keys while editing the form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let field_count = self.field_count();
        let on_submit = self.state.is_submit_active(field_count);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_field(field_count),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(field_count),
            KeyCode::Esc => self.state.focus = Focus::FormTypes,
            KeyCode::Enter if on_submit => self.submit(),
            KeyCode::Enter => self.state.next_field(field_count),
            KeyCode::Right => self.cycle_dropdown(true),
            KeyCode::Left => self.cycle_dropdown(false),
            // Ctrl/Alt chords are shortcuts, never text
            KeyCode::Char(c) if !on_submit && is_text_input(key.modifiers) => self.input_char(c),
            KeyCode::Backspace if !on_submit => self.backspace(),
            _ => {}
        }
    }

    /// Handle keys in the submissions list
    fn handle_submissions_key(&mut self, key: KeyEvent) -> Result<()> {
        let count = self.engine.submissions().len();
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(count),
            KeyCode::Enter | KeyCode::Char('e') => self.edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.start_delete_selected(),
            KeyCode::Char('y') => self.copy_selected()?,
            KeyCode::Esc | KeyCode::Tab => {
                self.state.focus = if self.engine.session().schema().is_some() {
                    Focus::Form
                } else {
                    Focus::FormTypes
                };
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the delete confirmation dialog
    fn handle_confirm_delete_key(&mut self, key: KeyEvent) {
        let Some(action) = self.state.pending_delete.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
                action.selected_option = !action.selected_option;
            }
            KeyCode::Enter => {
                if let Some(action) = self.state.pending_delete.take() {
                    if action.selected_option {
                        self.delete_submission(action);
                    }
                }
            }
            KeyCode::Esc => self.state.pending_delete = None,
            _ => {}
        }
    }

    fn select_form_type(&mut self, form_type: FormType) {
        self.engine.select(form_type);
        self.focus_active_form();
    }

    /// Point the sidebar and cursor at the session's active form
    fn focus_active_form(&mut self) {
        if let Some(form_type) = self.engine.session().active_form_type() {
            self.state.form_type_index = form_type.index();
        }
        self.state.active_field = 0;
        self.state.focus = Focus::Form;
    }

    fn focus_submissions(&mut self) {
        self.state.clamp_selection(self.engine.submissions().len());
        self.state.focus = Focus::Submissions;
    }

    fn input_char(&mut self, c: char) {
        let Some(field) = self.active_descriptor() else {
            return;
        };
        if !field.kind.accepts(c) {
            return;
        }
        let name = field.name.clone();
        let mut value = self.engine.session().value(&name).to_string();
        value.push(c);
        self.set_value(&name, value);
    }

    fn backspace(&mut self) {
        let Some(field) = self.active_descriptor() else {
            return;
        };
        let name = field.name.clone();
        let value = if field.is_dropdown() {
            String::new()
        } else {
            let mut value = self.engine.session().value(&name).to_string();
            value.pop();
            value
        };
        self.set_value(&name, value);
    }

    fn cycle_dropdown(&mut self, forward: bool) {
        let Some(field) = self.active_descriptor().filter(|f| f.is_dropdown()) else {
            return;
        };
        let current = self.engine.session().value(&field.name);
        let next = if forward {
            field.next_option(current)
        } else {
            field.prev_option(current)
        };
        let name = field.name.clone();
        self.set_value(&name, next);
    }

    fn set_value(&mut self, name: &str, value: String) {
        if let Err(err) = self.engine.set_field_value(name, value) {
            self.push_error(err.to_string());
        }
    }

    fn submit(&mut self) {
        match self.engine.submit() {
            Ok(index) => {
                self.state.selected_submission = index;
                self.state.active_field = 0;
            }
            Err(FormError::Validation(validation)) => {
                // Jump to the first offending field
                let first = validation.names().first().and_then(|name| {
                    self.engine
                        .session()
                        .schema()
                        .and_then(|s| s.fields.iter().position(|f| f.name == *name))
                });
                if let Some(position) = first {
                    self.state.active_field = position;
                    self.state.focus = Focus::Form;
                }
            }
            Err(FormError::NoFormSelected) => {
                self.state.status_message = Some("Select a form type first".to_string());
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    fn edit_selected(&mut self) {
        let Some(id) = self
            .engine
            .submissions()
            .get(self.state.selected_submission)
            .map(|s| s.id)
        else {
            return;
        };
        match self.engine.edit_submission_by_id(id) {
            Ok(()) => {
                self.focus_active_form();
                self.state.clamp_selection(self.engine.submissions().len());
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    fn start_delete_selected(&mut self) {
        let index = self.state.selected_submission;
        let Some(submission) = self.engine.submissions().get(index) else {
            return;
        };
        let action = PendingDeleteAction {
            submission_id: submission.id,
            entry_number: index + 1,
            entry_display: self.submission_summary(submission),
            selected_option: false,
        };
        if self.config.confirm_delete() {
            self.state.pending_delete = Some(action);
        } else {
            self.delete_submission(action);
        }
    }

    fn delete_submission(&mut self, action: PendingDeleteAction) {
        match self.engine.delete_submission_by_id(action.submission_id) {
            Ok(_) => {
                self.state.clamp_selection(self.engine.submissions().len());
                self.state.status_message = Some(format!("Deleted entry #{}", action.entry_number));
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    /// JSON of the selected submission as shown in the preview and copied
    /// to the clipboard
    fn selected_json(&self) -> Option<serde_json::Result<String>> {
        self.engine
            .submissions()
            .get(self.state.selected_submission)
            .map(|submission| self.preview_json(submission))
    }

    fn copy_selected(&mut self) -> Result<()> {
        let Some(json) = self.selected_json() else {
            return Ok(());
        };
        let json = json?;
        match self.copy_to_clipboard(&json) {
            Ok(()) => {
                self.state.status_message = Some(format!("Copied {} chars", json.len()));
            }
            Err(err) => {
                tracing::warn!("Clipboard unavailable: {err}");
                self.push_error(format!("Failed to copy to clipboard: {err}"));
            }
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}
