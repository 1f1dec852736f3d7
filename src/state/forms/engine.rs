//! FormEngine: the session plus the store of accepted submissions

use super::error::FormError;
use super::form_state::{FormSession, StatusMessage};
use super::schema::{FormType, SchemaRegistry};
use super::submissions::{Submission, SubmissionId, SubmissionStore};

/// Owns the form session and the submission store. All operations are
/// synchronous and leave state unchanged on error, apart from the status
/// message.
#[derive(Debug, Clone)]
pub struct FormEngine {
    session: FormSession,
    store: SubmissionStore,
}

impl FormEngine {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            session: FormSession::new(registry),
            store: SubmissionStore::new(),
        }
    }

    pub fn select_form_type(&mut self, identifier: &str) -> Result<(), FormError> {
        let form_type = self.session.select_form_type(identifier)?.form_type;
        tracing::info!(%form_type, "Form type selected");
        Ok(())
    }

    pub fn select(&mut self, form_type: FormType) {
        self.session.select(form_type);
        tracing::info!(%form_type, "Form type selected");
    }

    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.session.set_field_value(name, value)
    }

    /// Validate and, on success, append the submission. Returns its position.
    pub fn submit(&mut self) -> Result<usize, FormError> {
        match self.session.submit() {
            Ok(submission) => {
                let id = submission.id;
                let form_type = submission.form_type;
                let index = self.store.append(submission);
                tracing::info!(%id, %form_type, index, "Submission accepted");
                Ok(index)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Submission rejected");
                Err(err)
            }
        }
    }

    /// Pop the submission at `index` back into the session for editing
    pub fn edit_submission(&mut self, index: usize) -> Result<(), FormError> {
        let submission = self.store.edit(index).inspect_err(|err| self.report(err))?;
        self.restore(submission);
        Ok(())
    }

    pub fn edit_submission_by_id(&mut self, id: SubmissionId) -> Result<(), FormError> {
        let submission = self.store.edit_by_id(id).inspect_err(|err| self.report(err))?;
        self.restore(submission);
        Ok(())
    }

    pub fn delete_submission(&mut self, index: usize) -> Result<Submission, FormError> {
        let removed = self.store.delete(index).inspect_err(|err| self.report(err))?;
        tracing::info!(id = %removed.id, index, "Submission deleted");
        Ok(removed)
    }

    pub fn delete_submission_by_id(&mut self, id: SubmissionId) -> Result<Submission, FormError> {
        let removed = self
            .store
            .delete_by_id(id)
            .inspect_err(|err| self.report(err))?;
        tracing::info!(%id, "Submission deleted");
        Ok(removed)
    }

    /// Read access to the editing session
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn submissions(&self) -> &[Submission] {
        self.store.list()
    }

    fn restore(&mut self, submission: Submission) {
        let id = submission.id;
        let form_type = submission.form_type;
        self.session.load(submission);
        self.session.set_status(StatusMessage::Success(format!(
            "Editing {form_type} entry; submit to save it again"
        )));
        tracing::info!(%id, %form_type, "Submission reopened for editing");
    }

    fn report(&self, err: &FormError) {
        tracing::warn!(error = %err, "Submission store operation failed");
    }
}
