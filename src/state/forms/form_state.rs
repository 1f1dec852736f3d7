//! Form session: active schema, current values, validation and progress

use super::error::{FormError, MissingField, ValidationError};
use super::schema::{FormSchema, FormType, SchemaRegistry};
use super::submissions::{FormValues, Submission};

/// User-visible outcome of the last form operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Error(String),
    Success(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            Self::Error(s) | Self::Success(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Required fields currently empty, in schema order. Empty means valid.
pub type ValidationResult = Vec<MissingField>;

/// Holds the active form and its values, deriving validation and progress
/// from the registry's descriptors
#[derive(Debug, Clone)]
pub struct FormSession {
    registry: SchemaRegistry,
    active: Option<FormType>,
    values: FormValues,
    progress: f64,
    status: Option<StatusMessage>,
    /// Last rejected submit, kept so the view can mark offending fields
    rejection: Option<ValidationError>,
}

impl FormSession {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            active: None,
            values: FormValues::new(),
            progress: 0.0,
            status: None,
            rejection: None,
        }
    }

    /// Select a form type by its identifier
    pub fn select_form_type(&mut self, identifier: &str) -> Result<&FormSchema, FormError> {
        let form_type = self.registry.get_schema(identifier)?.form_type;
        Ok(self.select(form_type))
    }

    /// Activate `form_type`, discarding current values and messages
    pub fn select(&mut self, form_type: FormType) -> &FormSchema {
        self.active = Some(form_type);
        self.values.clear();
        self.progress = 0.0;
        self.status = None;
        self.rejection = None;
        self.registry.schema(form_type)
    }

    /// Set one field of the active schema and recompute progress
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let schema = self.schema().ok_or(FormError::NoFormSelected)?;
        if !schema.contains(name) {
            return Err(FormError::UnknownField {
                form_type: schema.form_type,
                field: name.to_string(),
            });
        }
        self.values.set(name, value);
        self.recompute_progress();
        Ok(())
    }

    /// Required fields of the active schema that are still empty
    pub fn validate(&self) -> ValidationResult {
        let Some(schema) = self.schema() else {
            return Vec::new();
        };
        schema
            .required_fields()
            .filter(|f| !self.values.is_filled(&f.name))
            .map(|f| MissingField {
                name: f.name.clone(),
                label: f.label.clone(),
            })
            .collect()
    }

    /// Accept the current values as a submission, or reject them leaving the
    /// values untouched
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        let form_type = self.active.ok_or(FormError::NoFormSelected)?;
        let missing_fields = self.validate();
        if !missing_fields.is_empty() {
            let err = ValidationError { missing_fields };
            self.status = Some(StatusMessage::Error(err.to_string()));
            self.rejection = Some(err.clone());
            return Err(err.into());
        }

        let values = std::mem::take(&mut self.values);
        self.progress = 0.0;
        self.rejection = None;
        self.status = Some(StatusMessage::Success(format!(
            "{form_type} submitted successfully"
        )));
        Ok(Submission::new(form_type, values))
    }

    /// Reactivate the schema that produced `submission` and restore its values
    pub fn load(&mut self, submission: Submission) {
        self.select(submission.form_type);
        let mut values = submission.values;
        values.retain_schema(self.registry.schema(submission.form_type));
        self.values = values;
        self.recompute_progress();
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    fn recompute_progress(&mut self) {
        let (filled, total) = match self.schema() {
            Some(schema) => schema
                .required_fields()
                .fold((0usize, 0usize), |(filled, total), f| {
                    (filled + usize::from(self.values.is_filled(&f.name)), total + 1)
                }),
            None => (0, 0),
        };
        self.progress = if total == 0 {
            0.0
        } else {
            100.0 * filled as f64 / total as f64
        };
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn active_form_type(&self) -> Option<FormType> {
        self.active
    }

    pub fn schema(&self) -> Option<&FormSchema> {
        self.active.map(|t| self.registry.schema(t))
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name)
    }

    /// Percentage of required fields filled, in [0, 100]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress rounded to a whole percent, for display
    pub fn progress_percent(&self) -> u16 {
        self.progress.round() as u16
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Whether the last rejected submit reported `name` as missing
    pub fn is_flagged(&self, name: &str) -> bool {
        self.rejection.as_ref().is_some_and(|r| r.is_missing(name))
    }
}
