//! Intranet Drafts - form auto-save for the school intranet
//!
//! Core modules:
//! - `draft`: Draft persistence (restore on load, save on input, clear on submit)
//! - `persistence`: Key-value store abstraction (LocalStorage on web, memory on native)
//! - `config`: Explicit auto-save configuration
//! - `platform`: Browser bindings (DOM forms, page wiring)
//! - `grades`, `dates`: Page utilities exposed to templates

pub mod config;
pub mod dates;
pub mod draft;
pub mod error;
pub mod grades;
pub mod persistence;
#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use config::{AutoSaveConfig, FieldSelection};
pub use draft::{DraftManager, DraftRecord, FormFields, MemoryForm, Registration, RestoreOutcome};
pub use error::{DraftError, StoreError};
pub use persistence::{KeyValueStore, MemoryStore};

/// Shared constants
pub mod consts {
    /// Storage key prefix for drafts (`form_<id>`)
    pub const DEFAULT_STORAGE_KEY_PREFIX: &str = "form_";
    /// Attribute marking a form for auto-save; its value selects the fields
    pub const AUTO_SAVE_ATTRIBUTE: &str = "data-auto-save";
    /// Grading scale used across the intranet
    pub const DEFAULT_MAX_GRADE: f64 = 20.0;
}
