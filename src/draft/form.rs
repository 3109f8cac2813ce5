//! Form field inventory

/// What the draft manager needs from a form
///
/// The manager keeps no schema of its own; it asks the form for its fields
/// every time.
pub trait FormFields {
    /// Stable identifier across reloads (the element id on the web)
    fn form_id(&self) -> Option<String>;

    /// Current name/value pairs in document order. Names may repeat.
    fn snapshot(&self) -> Vec<(String, String)>;

    fn has_field(&self, name: &str) -> bool;

    /// Set a field's value. Returns false when no field has this name;
    /// no field is ever created.
    fn set_field_value(&mut self, name: &str, value: &str) -> bool;
}

/// Non-empty, trimmed form id
pub(crate) fn stable_id<F: FormFields + ?Sized>(form: &F) -> Option<String> {
    form.form_id()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}

/// In-memory form used by the native binary and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    id: Option<String>,
    fields: Vec<(String, String)>,
}

impl MemoryForm {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: Vec::new(),
        }
    }

    /// Form without an id (auto-save is skipped for it)
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Add a field; a duplicate name replaces the earlier value
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(field) => field.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// Same id and field names, all values empty (a freshly loaded page)
    pub fn blank_copy(&self) -> Self {
        Self {
            id: self.id.clone(),
            fields: self
                .fields
                .iter()
                .map(|(name, _)| (name.clone(), String::new()))
                .collect(),
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FormFields for MemoryForm {
    fn form_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn snapshot(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }

    fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    fn set_field_value(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some(field) => {
                field.1 = value.to_string();
                true
            }
            None => false,
        }
    }
}
