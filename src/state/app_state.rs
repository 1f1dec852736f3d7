//! Application (view) state definitions

use super::forms::{FormType, SubmissionId};
use std::collections::VecDeque;

/// Which panel receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Form type sidebar
    #[default]
    FormTypes,
    /// Field inputs and the submit button
    Form,
    /// Submitted entries list
    Submissions,
}

impl Focus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FormTypes => "Form Types",
            Self::Form => "Form",
            Self::Submissions => "Submissions",
        }
    }
}

/// Delete awaiting confirmation in the confirm dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeleteAction {
    pub submission_id: SubmissionId,
    /// 1-based position shown to the user
    pub entry_number: usize,
    pub entry_display: String,
    /// true when "Delete" is highlighted, false for "Cancel"
    pub selected_option: bool,
}

/// View state that is not part of the form engine
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Focus,
    /// Highlighted entry in the form type sidebar
    pub form_type_index: usize,
    /// Active input; the index one past the last field is the submit button
    pub active_field: usize,
    pub selected_submission: usize,
    pub pending_delete: Option<PendingDeleteAction>,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl AppState {
    /// Form type under the sidebar cursor
    pub fn highlighted_form_type(&self) -> FormType {
        FormType::ALL[self.form_type_index % FormType::ALL.len()]
    }

    pub fn next_form_type(&mut self) {
        self.form_type_index = (self.form_type_index + 1) % FormType::ALL.len();
    }

    pub fn prev_form_type(&mut self) {
        if self.form_type_index == 0 {
            self.form_type_index = FormType::ALL.len() - 1;
        } else {
            self.form_type_index -= 1;
        }
    }

    /// Move to next form input (fields then submit button)
    pub fn next_field(&mut self, field_count: usize) {
        self.active_field = (self.active_field + 1) % (field_count + 1);
    }

    /// Move to previous form input
    pub fn prev_field(&mut self, field_count: usize) {
        if self.active_field == 0 {
            self.active_field = field_count;
        } else {
            self.active_field -= 1;
        }
    }

    pub fn is_submit_active(&self, field_count: usize) -> bool {
        self.active_field == field_count
    }

    /// Move submission selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_submission < max - 1 {
            self.selected_submission += 1;
        }
    }

    /// Move submission selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_submission > 0 {
            self.selected_submission -= 1;
        }
    }

    /// Keep the selection inside a list that may have shrunk
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_submission = self.selected_submission.min(len.saturating_sub(1));
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Errors queued behind the one on screen
    pub fn queued_errors(&self) -> usize {
        self.errors.len().saturating_sub(1)
    }
}
