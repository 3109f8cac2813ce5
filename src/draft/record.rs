//! Draft record: field name -> value, stored as a JSON object

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::FieldSelection;
use crate::error::DraftError;

/// Saved values of one form
///
/// Backed by a `BTreeMap` so the serialized form is stable: identical field
/// values always produce the same stored string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftRecord {
    pub fields: BTreeMap<String, String>,
}

impl DraftRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from snapshot pairs, keeping selected fields only.
    /// A name seen twice keeps its last value.
    pub fn from_snapshot<I>(pairs: I, selection: &FieldSelection) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let fields = pairs
            .into_iter()
            .filter(|(name, _)| selection.includes(name))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_json(&self) -> Result<String, DraftError> {
        serde_json::to_string(self).map_err(DraftError::Serialize)
    }

    /// Parse a stored value; anything but an object of strings is malformed
    pub fn from_json(json: &str) -> Result<Self, DraftError> {
        serde_json::from_str(json).map_err(DraftError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_last_write_wins() {
        let record = DraftRecord::from_snapshot(
            pairs(&[("name", "Jo"), ("email", ""), ("name", "Jon")]),
            &FieldSelection::All,
        );
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("name"), Some("Jon"));
    }

    #[test]
    fn test_selection_filters_fields() {
        let selection = FieldSelection::from_attribute("name");
        let record = DraftRecord::from_snapshot(pairs(&[("name", "Jon"), ("email", "jon@example.org")]), &selection);
        assert_eq!(record.get("email"), None);
        assert_eq!(record.get("name"), Some("Jon"));
    }

    #[test]
    fn test_json_is_sorted_object() {
        let record = DraftRecord::from_snapshot(pairs(&[("name", "Jon"), ("email", "")]), &FieldSelection::All);
        assert_eq!(record.to_json().unwrap(), r#"{"email":"","name":"Jon"}"#);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(DraftRecord::from_json("not json"), Err(DraftError::Parse(_))));
        assert!(matches!(DraftRecord::from_json("[1,2]"), Err(DraftError::Parse(_))));
        assert!(matches!(DraftRecord::from_json(r#"{"age":12}"#), Err(DraftError::Parse(_))));

        let record = DraftRecord::from_json(r#"{"note":"ligne 1\nligne 2 é"}"#).unwrap();
        assert_eq!(record.get("note"), Some("ligne 1\nligne 2 é"));
    }
}
