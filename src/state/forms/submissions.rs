//! Accepted submissions and the in-memory submission store

use super::error::FormError;
use super::schema::{FormSchema, FormType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Current field values keyed by field name. An absent key reads as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn is_filled(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// Drop every key that is not a field of `schema`
    pub fn retain_schema(&mut self, schema: &FormSchema) {
        self.0.retain(|name, _| schema.contains(name));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Stable identity of a submission, independent of its store position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for compact display
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable snapshot of accepted form values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub form_type: FormType,
    pub values: FormValues,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(form_type: FormType, values: FormValues) -> Self {
        Self {
            id: SubmissionId::new(),
            form_type,
            values,
            submitted_at: Utc::now(),
        }
    }

    /// Pretty JSON of the submitted values
    pub fn values_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.values)
    }
}

/// Ordered submissions in insertion order
#[derive(Debug, Clone, Default)]
pub struct SubmissionStore {
    entries: Vec<Submission>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to the end, returning the new position
    pub fn append(&mut self, submission: Submission) -> usize {
        self.entries.push(submission);
        self.entries.len() - 1
    }

    /// Remove the entry at `index`; later entries shift down by one
    pub fn delete(&mut self, index: usize) -> Result<Submission, FormError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Remove the entry at `index` and hand it back for editing
    pub fn edit(&mut self, index: usize) -> Result<Submission, FormError> {
        self.delete(index)
    }

    pub fn list(&self) -> &[Submission] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Submission> {
        self.entries.get(index)
    }

    pub fn position(&self, id: SubmissionId) -> Option<usize> {
        self.entries.iter().position(|s| s.id == id)
    }

    pub fn delete_by_id(&mut self, id: SubmissionId) -> Result<Submission, FormError> {
        let index = self
            .position(id)
            .ok_or(FormError::SubmissionNotFound(id))?;
        self.delete(index)
    }

    pub fn edit_by_id(&mut self, id: SubmissionId) -> Result<Submission, FormError> {
        self.delete_by_id(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), FormError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(FormError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(first: &str) -> Submission {
        Submission::new(
            FormType::User,
            [("firstName", first), ("lastName", "Lee")]
                .into_iter()
                .collect(),
        )
    }

    fn store_with(names: &[&str]) -> SubmissionStore {
        let mut store = SubmissionStore::new();
        for name in names {
            store.append(submission(name));
        }
        store
    }

    fn first_names(store: &SubmissionStore) -> Vec<&str> {
        store
            .list()
            .iter()
            .map(|s| s.values.get("firstName"))
            .collect()
    }

    mod form_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_absent_key_reads_empty() {
            let values = FormValues::new();
            assert_eq!(values.get("firstName"), "");
            assert!(!values.is_filled("firstName"));
        }

        #[test]
        fn test_empty_string_is_not_filled() {
            let mut values = FormValues::new();
            values.set("firstName", "");
            assert!(!values.is_filled("firstName"));
            values.set("firstName", "Ann");
            assert!(values.is_filled("firstName"));
        }

        #[test]
        fn test_serializes_as_plain_object() {
            let values: FormValues = [("age", "30")].into_iter().collect();
            assert_eq!(serde_json::to_string(&values).unwrap(), r#"{"age":"30"}"#);
        }
    }

    mod store {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_append_returns_position() {
            let mut store = SubmissionStore::new();
            assert_eq!(store.append(submission("Ann")), 0);
            assert_eq!(store.append(submission("Bob")), 1);
            assert_eq!(store.len(), 2);
        }

        #[test]
        fn test_delete_shifts_later_entries() {
            let mut store = store_with(&["Ann", "Bob", "Cid"]);
            let removed = store.delete(1).unwrap();
            assert_eq!(removed.values.get("firstName"), "Bob");
            assert_eq!(first_names(&store), vec!["Ann", "Cid"]);
        }

        #[test]
        fn test_delete_out_of_range() {
            let mut store = store_with(&["Ann"]);
            assert_eq!(
                store.delete(1).unwrap_err(),
                FormError::IndexOutOfRange { index: 1, len: 1 }
            );
            assert_eq!(store.len(), 1);
        }

        #[test]
        fn test_edit_removes_and_returns_entry() {
            let mut store = store_with(&["Ann", "Bob"]);
            let edited = store.edit(0).unwrap();
            assert_eq!(edited.form_type, FormType::User);
            assert_eq!(edited.values.get("firstName"), "Ann");
            assert_eq!(first_names(&store), vec!["Bob"]);
        }

        #[test]
        fn test_edit_on_empty_store() {
            let mut store = SubmissionStore::new();
            assert!(matches!(
                store.edit(0),
                Err(FormError::IndexOutOfRange { index: 0, len: 0 })
            ));
        }

        #[test]
        fn test_delete_by_id_survives_reordering() {
            let mut store = store_with(&["Ann", "Bob", "Cid"]);
            let cid = store.get(2).unwrap().id;
            store.delete(0).unwrap();
            let removed = store.delete_by_id(cid).unwrap();
            assert_eq!(removed.values.get("firstName"), "Cid");
            assert_eq!(first_names(&store), vec!["Bob"]);
        }

        #[test]
        fn test_delete_by_unknown_id() {
            let mut store = store_with(&["Ann"]);
            let stale = SubmissionId::new();
            assert_eq!(
                store.delete_by_id(stale).unwrap_err(),
                FormError::SubmissionNotFound(stale)
            );
        }

        #[test]
        fn test_edit_by_id() {
            let mut store = store_with(&["Ann", "Bob"]);
            let bob = store.get(1).unwrap().id;
            assert_eq!(store.edit_by_id(bob).unwrap().id, bob);
            assert_eq!(store.position(bob), None);
        }

        #[test]
        fn test_ids_are_unique() {
            let store = store_with(&["Ann", "Ann"]);
            assert_ne!(store.list()[0].id, store.list()[1].id);
        }

        #[test]
        fn test_short_id_is_eight_chars() {
            assert_eq!(SubmissionId::new().short().len(), 8);
        }
    }
}
