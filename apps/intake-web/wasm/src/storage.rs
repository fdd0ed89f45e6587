//! `localStorage` adapter for the submission log

use intake_core::{IntakeError, KeyValueStore};
use wasm_bindgen::JsValue;

/// Browser `localStorage`, resolved on every call
///
/// Storage may be disabled (private browsing, blocked cookies); resolving
/// lazily keeps that a per-operation error instead of a mount failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> intake_core::Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| IntakeError::Storage("No window".into()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| IntakeError::Storage("No localStorage".into()))
    }
}

fn js_error(err: JsValue) -> IntakeError {
    IntakeError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> intake_core::Result<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> intake_core::Result<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> intake_core::Result<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
