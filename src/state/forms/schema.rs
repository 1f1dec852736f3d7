//! Form types, schemas and the schema registry

use super::error::{FormError, SchemaError};
use super::field::FieldDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// The fixed set of form types a user can pick from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum FormType {
    #[default]
    #[serde(rename = "User Information")]
    User,
    #[serde(rename = "Address Information")]
    Address,
    #[serde(rename = "Payment Information")]
    Payment,
}

impl FormType {
    pub const ALL: [FormType; 3] = [FormType::User, FormType::Address, FormType::Payment];

    /// Identifier used in schema files and shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User Information",
            Self::Address => "Address Information",
            Self::Payment => "Payment Information",
        }
    }

    /// Position in [`FormType::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::User => 0,
            Self::Address => 1,
            Self::Payment => 2,
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FormType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| FormError::UnknownFormType(s.to_string()))
    }
}

/// Ordered field list of one form type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    pub form_type: FormType,
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn check(&self) -> Result<(), SchemaError> {
        let form_type = self.form_type;
        if self.fields.is_empty() {
            return Err(SchemaError::EmptySchema(form_type));
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    form_type,
                    field: field.name.clone(),
                });
            }
            match (field.is_dropdown(), field.options.is_empty()) {
                (true, true) => {
                    return Err(SchemaError::MissingOptions {
                        form_type,
                        field: field.name.clone(),
                    })
                }
                (false, false) => {
                    return Err(SchemaError::UnexpectedOptions {
                        form_type,
                        field: field.name.clone(),
                    })
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Field lists keyed by form type, as read from a schema source
pub type SchemaMap = BTreeMap<FormType, Vec<FieldDescriptor>>;

/// Where form schemas come from. Loading is synchronous.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaSource {
    fn load(&self) -> Result<SchemaMap, SchemaError>;
}

/// The stock schemas shipped with the application
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSchemas;

const STATES: &[&str] = &[
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
    "Delhi",
    "Haryana",
    "Kerala",
    "Telangana",
];

impl SchemaSource for BuiltinSchemas {
    fn load(&self) -> Result<SchemaMap, SchemaError> {
        let mut map = SchemaMap::new();
        map.insert(
            FormType::User,
            vec![
                FieldDescriptor::text("firstName", "First Name", true),
                FieldDescriptor::text("lastName", "Last Name", true),
                FieldDescriptor::number("age", "Age", false),
            ],
        );
        map.insert(
            FormType::Address,
            vec![
                FieldDescriptor::text("street", "Street", true),
                FieldDescriptor::text("city", "City", true),
                FieldDescriptor::dropdown("state", "State", STATES, true),
                FieldDescriptor::text("PinCode", "Pin Code", false),
            ],
        );
        map.insert(
            FormType::Payment,
            vec![
                FieldDescriptor::text("cardNumber", "Card Number", true),
                FieldDescriptor::date("expiryDate", "Expiry Date", true),
                FieldDescriptor::password("cvv", "CVV", true),
                FieldDescriptor::text("cardholderName", "Cardholder Name", true),
            ],
        );
        Ok(map)
    }
}

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    fields: Vec<FieldDescriptor>,
}

/// JSON schema file:
/// `{ "User Information": { "fields": [ { "name": ..., "type": ..., ... } ] }, ... }`
#[derive(Debug, Clone)]
pub struct JsonSchemaFile {
    pub path: PathBuf,
}

impl JsonSchemaFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(content: &str) -> Result<SchemaMap, SchemaError> {
        let docs: BTreeMap<FormType, SchemaDocument> = serde_json::from_str(content)?;
        Ok(docs.into_iter().map(|(t, doc)| (t, doc.fields)).collect())
    }
}

impl SchemaSource for JsonSchemaFile {
    fn load(&self) -> Result<SchemaMap, SchemaError> {
        let content = fs::read_to_string(&self.path)?;
        Self::parse(&content)
    }
}

/// Immutable lookup from form type to schema
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    /// One schema per form type, ordered like [`FormType::ALL`]
    schemas: Vec<FormSchema>,
}

impl SchemaRegistry {
    /// Build a registry, rejecting sources that miss a form type or carry a
    /// malformed schema
    pub fn from_source(source: &dyn SchemaSource) -> Result<Self, SchemaError> {
        let mut map = source.load()?;
        let mut schemas = Vec::with_capacity(FormType::ALL.len());
        for form_type in FormType::ALL {
            let fields = map
                .remove(&form_type)
                .ok_or(SchemaError::MissingFormType(form_type))?;
            let schema = FormSchema { form_type, fields };
            schema.check()?;
            schemas.push(schema);
        }
        tracing::debug!("Loaded {} form schemas", schemas.len());
        Ok(Self { schemas })
    }

    /// Registry over the stock schemas
    #[cfg(test)]
    pub fn builtin() -> Result<Self, SchemaError> {
        Self::from_source(&BuiltinSchemas)
    }

    /// Look up a schema by its identifier
    pub fn get_schema(&self, identifier: &str) -> Result<&FormSchema, FormError> {
        let form_type: FormType = identifier.parse()?;
        Ok(self.schema(form_type))
    }

    pub fn schema(&self, form_type: FormType) -> &FormSchema {
        &self.schemas[form_type.index()]
    }

    pub fn schemas(&self) -> &[FormSchema] {
        &self.schemas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::builtin().unwrap()
    }

    mod form_type {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parse_known_identifiers() {
            for form_type in FormType::ALL {
                assert_eq!(form_type.label().parse::<FormType>().unwrap(), form_type);
            }
        }

        #[test]
        fn test_parse_unknown_identifier() {
            let err = "Shipping Information".parse::<FormType>().unwrap_err();
            assert_eq!(
                err,
                FormError::UnknownFormType("Shipping Information".to_string())
            );
        }

        #[test]
        fn test_index_matches_all_order() {
            for (i, form_type) in FormType::ALL.iter().enumerate() {
                assert_eq!(form_type.index(), i);
            }
        }

        #[test]
        fn test_serde_uses_labels() {
            let json = serde_json::to_string(&FormType::Address).unwrap();
            assert_eq!(json, "\"Address Information\"");
        }
    }

    mod registry {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_every_schema_is_non_empty_with_unique_names() {
            let registry = registry();
            for form_type in FormType::ALL {
                let schema = registry.schema(form_type);
                assert!(!schema.is_empty());
                let names: HashSet<_> = schema.fields.iter().map(|f| &f.name).collect();
                assert_eq!(names.len(), schema.len());
            }
        }

        #[test]
        fn test_get_schema_by_identifier() {
            let registry = registry();
            let schema = registry.get_schema("User Information").unwrap();
            let names: Vec<_> = schema.fields.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["firstName", "lastName", "age"]);
        }

        #[test]
        fn test_get_schema_unknown_identifier() {
            let registry = registry();
            assert!(matches!(
                registry.get_schema("Medical Information"),
                Err(FormError::UnknownFormType(_))
            ));
        }

        #[test]
        fn test_required_fields() {
            let registry = registry();
            let schema = registry.schema(FormType::Address);
            let required: Vec<_> = schema.required_fields().map(|f| f.name.as_str()).collect();
            assert_eq!(required, vec!["street", "city", "state"]);
        }

        #[test]
        fn test_address_state_is_dropdown() {
            let registry = registry();
            let state = registry.schema(FormType::Address).field("state").unwrap();
            assert!(state.is_dropdown());
            assert_eq!(state.options.len(), 7);
        }
    }

    mod sources {
        use super::*;
        use pretty_assertions::assert_eq;

        fn builtin_map() -> SchemaMap {
            BuiltinSchemas.load().unwrap()
        }

        #[test]
        fn test_missing_form_type_rejected() {
            let mut source = MockSchemaSource::new();
            source.expect_load().returning(|| {
                let mut map = builtin_map();
                map.remove(&FormType::Payment);
                Ok(map)
            });
            let err = SchemaRegistry::from_source(&source).unwrap_err();
            assert!(matches!(err, SchemaError::MissingFormType(FormType::Payment)));
        }

        #[test]
        fn test_empty_schema_rejected() {
            let mut source = MockSchemaSource::new();
            source.expect_load().returning(|| {
                let mut map = builtin_map();
                map.insert(FormType::User, vec![]);
                Ok(map)
            });
            let err = SchemaRegistry::from_source(&source).unwrap_err();
            assert!(matches!(err, SchemaError::EmptySchema(FormType::User)));
        }

        #[test]
        fn test_duplicate_field_rejected() {
            let mut source = MockSchemaSource::new();
            source.expect_load().returning(|| {
                let mut map = builtin_map();
                map.insert(
                    FormType::User,
                    vec![
                        FieldDescriptor::text("name", "Name", true),
                        FieldDescriptor::text("name", "Name again", false),
                    ],
                );
                Ok(map)
            });
            let err = SchemaRegistry::from_source(&source).unwrap_err();
            assert!(matches!(err, SchemaError::DuplicateField { .. }));
        }

        #[test]
        fn test_dropdown_without_options_rejected() {
            let mut source = MockSchemaSource::new();
            source.expect_load().returning(|| {
                let mut map = builtin_map();
                map.insert(
                    FormType::Address,
                    vec![FieldDescriptor::dropdown("state", "State", &[], true)],
                );
                Ok(map)
            });
            let err = SchemaRegistry::from_source(&source).unwrap_err();
            assert!(matches!(err, SchemaError::MissingOptions { .. }));
        }

        #[test]
        fn test_options_on_text_field_rejected() {
            let mut source = MockSchemaSource::new();
            source.expect_load().returning(|| {
                let mut map = builtin_map();
                let mut city = FieldDescriptor::text("city", "City", true);
                city.options = vec!["Pune".to_string()];
                map.insert(FormType::Address, vec![city]);
                Ok(map)
            });
            let err = SchemaRegistry::from_source(&source).unwrap_err();
            assert!(matches!(err, SchemaError::UnexpectedOptions { .. }));
        }

        #[test]
        fn test_source_error_propagates() {
            let mut source = MockSchemaSource::new();
            source.expect_load().returning(|| {
                Err(SchemaError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "gone",
                )))
            });
            assert!(matches!(
                SchemaRegistry::from_source(&source),
                Err(SchemaError::Io(_))
            ));
        }

        #[test]
        fn test_json_schema_file_format() {
            let json = r#"{
                "User Information": { "fields": [
                    { "name": "nick", "type": "text", "label": "Nickname", "required": true }
                ] },
                "Address Information": { "fields": [
                    { "name": "state", "type": "dropdown", "label": "State",
                      "options": ["Goa"], "required": false }
                ] },
                "Payment Information": { "fields": [
                    { "name": "cvv", "type": "password", "label": "CVV", "required": true }
                ] }
            }"#;
            let map = JsonSchemaFile::parse(json).unwrap();
            assert_eq!(map.len(), 3);
            assert_eq!(
                map[&FormType::User],
                vec![FieldDescriptor::text("nick", "Nickname", true)]
            );
        }

        #[test]
        fn test_json_schema_file_unknown_form_type() {
            let json = r#"{ "Shipping Information": { "fields": [] } }"#;
            assert!(matches!(
                JsonSchemaFile::parse(json),
                Err(SchemaError::Parse(_))
            ));
        }

        #[test]
        fn test_json_schema_file_missing_path() {
            let source = JsonSchemaFile::new("/nonexistent/dynform/schemas.json");
            assert!(matches!(source.load(), Err(SchemaError::Io(_))));
        }
    }
}
