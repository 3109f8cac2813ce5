//! Form draft persistence
//!
//! Keeps in-progress form values in the persistent store:
//! - Restore on page load (`initialize`)
//! - Snapshot on every edit (`on_field_change`)
//! - Clear on submit (`on_submit`)
//!
//! Every operation is best-effort. Store or parse failures are logged and the
//! form keeps working without auto-save.

pub mod form;
pub mod manager;
pub mod record;

pub use form::{FormFields, MemoryForm};
pub use manager::{DraftManager, Registration, RestoreOutcome};
pub use record::DraftRecord;
