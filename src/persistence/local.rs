//! `window.localStorage` backend

use wasm_bindgen::{JsCast, JsValue};

use super::KeyValueStore;
use crate::error::StoreError;

/// Handle to the origin's LocalStorage
///
/// Constructed even when the browser refuses access; every call then fails
/// with [`StoreError::Unavailable`] so forms keep working without drafts.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if storage.is_none() {
            log::warn!("LocalStorage unavailable, drafts disabled");
        }

        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

fn map_js_error(err: JsValue) -> StoreError {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => StoreError::QuotaExceeded,
        Some(ex) => StoreError::Backend(format!("{}: {}", ex.name(), ex.message())),
        None => StoreError::Backend(format!("{:?}", err)),
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(map_js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(map_js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(map_js_error)
    }
}
