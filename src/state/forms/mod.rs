//! Form domain layer
//!
//! Schema-driven forms: a registry of per-type field schemas, a session
//! holding the values being edited, and the store of accepted submissions.
//! The TUI addresses stored entries by id; the index-based store and engine
//! operations are exercised by the tests only.

#![allow(dead_code)]

mod engine;
mod error;
mod field;
mod form_state;
mod schema;
mod submissions;

pub use engine::FormEngine;
pub use error::{FormError, SchemaError};
pub use field::{FieldDescriptor, FieldKind};
pub use form_state::StatusMessage;
pub use schema::{BuiltinSchemas, FormSchema, FormType, JsonSchemaFile, SchemaRegistry, SchemaSource};
pub use submissions::{Submission, SubmissionId};
