//! Draft lifecycle over a form and a key-value store

use std::rc::Rc;

use super::form::{FormFields, stable_id};
use super::record::DraftRecord;
use crate::config::AutoSaveConfig;
use crate::error::DraftError;
use crate::persistence::KeyValueStore;

/// Result of restoring a draft into a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Form has no stable id; auto-save is off for it
    Skipped,
    /// Nothing usable stored (absent, unreadable or malformed)
    NoDraft,
    Restored {
        /// Fields whose value was set
        applied: Vec<String>,
        /// Stored keys with no matching (or no selected) field
        ignored: Vec<String>,
    },
}

/// Persists form drafts in a key-value store
#[derive(Debug)]
pub struct DraftManager<S> {
    store: S,
    config: AutoSaveConfig,
}

impl<S: KeyValueStore> DraftManager<S> {
    pub fn new(store: S, config: AutoSaveConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AutoSaveConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restore a previously saved draft into the form
    pub fn initialize<F: FormFields + ?Sized>(&self, form: &mut F) -> RestoreOutcome {
        let Some(form_id) = stable_id(&*form) else {
            log::debug!("Form without id, auto-save skipped");
            return RestoreOutcome::Skipped;
        };
        self.restore_into(&form_id, form)
    }

    /// Snapshot the form and overwrite its stored draft
    pub fn on_field_change<F: FormFields + ?Sized>(&self, form: &F) {
        if let Some(form_id) = stable_id(form) {
            self.save_from(&form_id, form);
        }
    }

    /// Drop the stored draft, without waiting for the server's answer
    pub fn on_submit<F: FormFields + ?Sized>(&self, form: &F) {
        if let Some(form_id) = stable_id(form) {
            self.discard(&form_id);
        }
    }

    /// Stored draft for a form id, if present and well-formed
    pub fn load(&self, form_id: &str) -> Option<DraftRecord> {
        match self.read(form_id) {
            Ok(record) => record,
            Err(err) => {
                log_failure(form_id, "read", &err);
                None
            }
        }
    }

    /// Remove the stored draft for a form id
    pub fn discard(&self, form_id: &str) {
        let key = self.config.storage_key(form_id);
        match self.store.remove(&key) {
            Ok(()) => log::info!("Draft cleared for form '{}'", form_id),
            Err(err) => log_failure(form_id, "clear", &DraftError::from(err)),
        }
    }

    /// Restore the form's draft and return a handle for its later events.
    /// Forms without a stable id get `None`.
    pub fn register<F: FormFields + ?Sized>(self: &Rc<Self>, form: &mut F) -> Option<Registration<S>> {
        let form_id = stable_id(&*form)?;
        self.restore_into(&form_id, form);
        log::debug!("Auto-save registered for form '{}'", form_id);
        Some(Registration {
            manager: Rc::clone(self),
            form_id,
        })
    }

    fn read(&self, form_id: &str) -> Result<Option<DraftRecord>, DraftError> {
        let key = self.config.storage_key(form_id);
        let Some(json) = self.store.get(&key)? else {
            return Ok(None);
        };
        Ok(Some(DraftRecord::from_json(&json)?))
    }

    fn write(&self, form_id: &str, record: &DraftRecord) -> Result<(), DraftError> {
        let key = self.config.storage_key(form_id);
        let json = record.to_json()?;
        self.store.set(&key, &json)?;
        Ok(())
    }

    fn restore_into<F: FormFields + ?Sized>(&self, form_id: &str, form: &mut F) -> RestoreOutcome {
        let Some(record) = self.load(form_id) else {
            return RestoreOutcome::NoDraft;
        };

        let mut applied = Vec::new();
        let mut ignored = Vec::new();
        for (name, value) in record.iter() {
            if self.config.fields.includes(name)
                && form.has_field(name)
                && form.set_field_value(name, value)
            {
                applied.push(name.to_string());
            } else {
                ignored.push(name.to_string());
            }
        }

        log::info!(
            "Draft restored for form '{}' ({} fields, {} ignored)",
            form_id,
            applied.len(),
            ignored.len()
        );
        RestoreOutcome::Restored { applied, ignored }
    }

    fn save_from<F: FormFields + ?Sized>(&self, form_id: &str, form: &F) {
        let record = DraftRecord::from_snapshot(form.snapshot(), &self.config.fields);
        match self.write(form_id, &record) {
            Ok(()) => log::debug!("Draft saved for form '{}' ({} fields)", form_id, record.len()),
            Err(err) => log_failure(form_id, "save", &err),
        }
    }
}

fn log_failure(form_id: &str, action: &str, err: &DraftError) {
    match err {
        DraftError::Parse(_) => log::error!("Error restoring form data for '{}': {}", form_id, err),
        _ => log::warn!("Could not {} draft for form '{}': {}", action, form_id, err),
    }
}

/// Auto-save registration for one form
///
/// Forwards the form's events to the manager under the id captured at
/// registration. It holds no listeners itself: whoever owns the event
/// source stops forwarding (the web handle detaches its DOM listeners).
#[derive(Debug)]
pub struct Registration<S: KeyValueStore> {
    manager: Rc<DraftManager<S>>,
    form_id: String,
}

impl<S: KeyValueStore> Registration<S> {
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn storage_key(&self) -> String {
        self.manager.config.storage_key(&self.form_id)
    }

    pub fn field_changed<F: FormFields + ?Sized>(&self, form: &F) {
        self.manager.save_from(&self.form_id, form);
    }

    pub fn submitted(&self) {
        self.manager.discard(&self.form_id);
    }
}

impl<S: KeyValueStore> Drop for Registration<S> {
    fn drop(&mut self) {
        log::debug!("Auto-save registration ended for form '{}'", self.form_id);
    }
}
