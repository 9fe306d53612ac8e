//! `localStorage` snapshot store

use report_session::{SnapshotStore, StoreError};
use wasm_bindgen::JsValue;

/// Browser `localStorage`; one string entry per key
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("No window".into()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage not available".into()))
    }
}

impl SnapshotStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_error(&e)))
    }

    fn save(&self, key: &str, json: &str) -> Result<(), StoreError> {
        // Quota errors surface here
        Self::storage()?
            .set_item(key, json)
            .map_err(|e| StoreError::Unavailable(js_error(&e)))
    }
}

pub(crate) fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
