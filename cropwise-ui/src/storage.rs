//! `window.sessionStorage` backend for [`SessionStore`].

use cropwise_core::error::StoreError;
use cropwise_core::session::{SessionStore, SessionTransfer};
use wasm_bindgen::JsValue;
use web_sys::Storage;

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// The browser session's `sessionStorage`.
#[derive(Clone)]
pub struct BrowserSessionStorage {
    storage: Storage,
}

impl BrowserSessionStorage {
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .session_storage()
            .map_err(|e| StoreError::Unavailable(js_error(e)))?
            .ok_or_else(|| StoreError::Unavailable("sessionStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Backend(js_error(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(js_error(e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Backend(js_error(e)))
    }
}

/// Transfer slot backed by the current tab's `sessionStorage`.
pub fn session_transfer() -> Result<SessionTransfer<BrowserSessionStorage>, StoreError> {
    BrowserSessionStorage::open().map(SessionTransfer::new)
}

/// Whether a valid input record is saved in this tab.
pub fn has_saved_input() -> bool {
    session_transfer().map(|t| t.has_record()).unwrap_or(false)
}
