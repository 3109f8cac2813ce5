//! Auto-save configuration
//!
//! Passed explicitly to the draft manager. The page binding builds one from
//! the `data-auto-save` attribute; nothing else reads markup.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_STORAGE_KEY_PREFIX;

/// Which form fields take part in the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldSelection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl FieldSelection {
    /// Parse an attribute value: empty or `all` selects every field,
    /// otherwise a comma-separated list of field names.
    pub fn from_attribute(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return FieldSelection::All;
        }

        let names: BTreeSet<String> = value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        if names.is_empty() {
            FieldSelection::All
        } else {
            FieldSelection::Only(names)
        }
    }

    /// Whether a field with this name is persisted and restored
    pub fn includes(&self, name: &str) -> bool {
        match self {
            FieldSelection::All => true,
            FieldSelection::Only(names) => names.contains(name),
        }
    }
}

/// Draft manager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSaveConfig {
    /// Prepended to the form id to build the storage key
    pub storage_key_prefix: String,
    /// Fields to persist
    pub fields: FieldSelection,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            storage_key_prefix: DEFAULT_STORAGE_KEY_PREFIX.to_string(),
            fields: FieldSelection::All,
        }
    }
}

impl AutoSaveConfig {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.storage_key_prefix = prefix.into();
        self
    }

    pub fn with_fields(mut self, fields: FieldSelection) -> Self {
        self.fields = fields;
        self
    }

    /// Storage key for a form id
    pub fn storage_key(&self, form_id: &str) -> String {
        format!("{}{}", self.storage_key_prefix, form_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AutoSaveConfig::default();
        assert_eq!(config.storage_key_prefix, "form_");
        assert_eq!(config.fields, FieldSelection::All);
        assert_eq!(config.storage_key("contact-form"), "form_contact-form");
    }

    #[test]
    fn test_field_selection_from_attribute() {
        assert_eq!(FieldSelection::from_attribute(""), FieldSelection::All);
        assert_eq!(FieldSelection::from_attribute("  ALL "), FieldSelection::All);
        assert_eq!(FieldSelection::from_attribute(" , ,"), FieldSelection::All);

        let selection = FieldSelection::from_attribute("name, email,,");
        assert!(selection.includes("name"));
        assert!(selection.includes("email"));
        assert!(!selection.includes("message"));
    }

    #[test]
    fn test_config_deserialize_with_defaults() {
        let config: AutoSaveConfig = serde_json::from_str(r#"{"storage_key_prefix":"draft:"}"#).unwrap();
        assert_eq!(config.storage_key("notes"), "draft:notes");
        assert_eq!(config.fields, FieldSelection::All);

        let config: AutoSaveConfig = serde_json::from_str(r#"{"fields":{"only":["title"]}}"#).unwrap();
        assert_eq!(config.storage_key_prefix, "form_");
        assert!(config.fields.includes("title"));
        assert!(!config.fields.includes("body"));
    }
}
