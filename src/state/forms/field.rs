//! Form field descriptors

use serde::{Deserialize, Serialize};

/// Input kind of a field. Controls how the value is entered and displayed;
/// the stored value is always a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
    Password,
    Dropdown,
}

impl FieldKind {
    /// Whether a typed character is accepted for this kind of field
    pub fn accepts(&self, c: char) -> bool {
        match self {
            FieldKind::Text | FieldKind::Password => !c.is_control(),
            FieldKind::Number => c.is_ascii_digit() || c == '-' || c == '.',
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            // Dropdown values are picked from the option list, never typed
            FieldKind::Dropdown => false,
        }
    }

    /// Input hint shown in the field title
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FieldKind::Date => Some("YYYY-MM-DD"),
            FieldKind::Dropdown => Some("←/→ to choose"),
            _ => None,
        }
    }
}

/// Static metadata for one input of a form schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    fn new(name: &str, kind: FieldKind, label: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind,
            label: label.to_string(),
            required,
            options: Vec::new(),
        }
    }

    /// Create a free text field
    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, FieldKind::Text, label, required)
    }

    /// Create a numeric field
    pub fn number(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, FieldKind::Number, label, required)
    }

    /// Create a date field
    pub fn date(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, FieldKind::Date, label, required)
    }

    /// Create a password field (value is masked when rendered)
    pub fn password(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, FieldKind::Password, label, required)
    }

    /// Create a dropdown field with its ordered options
    pub fn dropdown(name: &str, label: &str, options: &[&str], required: bool) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
            ..Self::new(name, FieldKind::Dropdown, label, required)
        }
    }

    pub fn is_dropdown(&self) -> bool {
        self.kind == FieldKind::Dropdown
    }

    /// Next dropdown option after `current`. An empty value moves to the first
    /// option; the last option wraps back to unselected.
    pub fn next_option(&self, current: &str) -> String {
        match self.options.iter().position(|o| o == current) {
            None => self.options.first().cloned().unwrap_or_default(),
            Some(i) if i + 1 < self.options.len() => self.options[i + 1].clone(),
            Some(_) => String::new(),
        }
    }

    /// Previous dropdown option before `current`, wrapping through unselected
    pub fn prev_option(&self, current: &str) -> String {
        match self.options.iter().position(|o| o == current) {
            None => self.options.last().cloned().unwrap_or_default(),
            Some(0) => String::new(),
            Some(i) => self.options[i - 1].clone(),
        }
    }

    /// Value as it should be displayed (passwords masked)
    pub fn display_value(&self, value: &str, mask_passwords: bool) -> String {
        match self.kind {
            FieldKind::Password if mask_passwords => "•".repeat(value.chars().count()),
            _ => value.to_string(),
        }
    }
}
