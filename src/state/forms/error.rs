//! Form engine error types

use super::schema::FormType;
use super::submissions::SubmissionId;
use thiserror::Error;

/// A required field that was empty at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    pub name: String,
    pub label: String,
}

/// Submit was rejected because required fields are empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill out the {}", labels(.missing_fields))]
pub struct ValidationError {
    pub missing_fields: Vec<MissingField>,
}

impl ValidationError {
    /// Names of the missing fields, in schema order
    pub fn names(&self) -> Vec<&str> {
        self.missing_fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn is_missing(&self, name: &str) -> bool {
        self.missing_fields.iter().any(|f| f.name == name)
    }
}

fn labels(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(|f| f.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised by form engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown form type: {0}")]
    UnknownFormType(String),
    #[error("No form type selected")]
    NoFormSelected,
    #[error("Field '{field}' is not part of the {form_type} form")]
    UnknownField { form_type: FormType, field: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Submission index {index} out of range (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Submission not found: {0}")]
    SubmissionNotFound(SubmissionId),
}

/// Errors raised while building a registry from a schema source
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema for {0} is missing")]
    MissingFormType(FormType),
    #[error("Schema for {0} has no fields")]
    EmptySchema(FormType),
    #[error("Schema for {form_type} defines field '{field}' more than once")]
    DuplicateField { form_type: FormType, field: String },
    #[error("Dropdown field '{field}' in {form_type} has no options")]
    MissingOptions { form_type: FormType, field: String },
    #[error("Field '{field}' in {form_type} has options but is not a dropdown")]
    UnexpectedOptions { form_type: FormType, field: String },
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse schema file: {0}")]
    Parse(#[from] serde_json::Error),
}
