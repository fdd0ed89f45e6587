//! WASM bindings for the program landing page
//!
//! Mounts the page's interactive pieces (mobile nav, application form,
//! smooth anchor scrolling and the patent details modal) onto existing
//! markup. Each piece is optional: if its elements are missing it is simply
//! not mounted.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { mountSite, storedSubmissions } from './pkg/intake_web_wasm.js';
//!
//! await init();
//! const mounted = mountSite();            // default selectors
//! // mountSite(JSON.stringify({ modalId: 'details' }));  // partial override
//! console.log(JSON.parse(storedSubmissions()).length);
//! ```

pub mod dom;
pub mod form;
pub mod modal;
pub mod nav;
pub mod scroll;
pub mod storage;

use intake_core::{validate_payload, ApplicationPayload, SiteConfig, SubmissionLog};
use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub use storage::LocalStore;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Which components found their markup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountReport {
    pub nav: bool,
    pub form: bool,
    pub anchors: usize,
    pub modal: bool,
}

thread_local! {
    /// Storage key of the last `mountSite` call
    static MOUNTED_STORAGE_KEY: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn remember_storage_key(key: &str) {
    MOUNTED_STORAGE_KEY.with(|k| *k.borrow_mut() = Some(key.to_string()));
}

/// Explicit key, else the mounted one, else the default
fn resolve_storage_key(explicit: Option<String>) -> String {
    explicit
        .or_else(|| MOUNTED_STORAGE_KEY.with(|k| k.borrow().clone()))
        .unwrap_or_else(|| SiteConfig::default().storage_key)
}

fn parse_config(config_json: Option<&str>) -> Result<SiteConfig, String> {
    match config_json {
        Some(json) if !json.trim().is_empty() => {
            SiteConfig::from_json(json).map_err(|e| e.to_string())
        }
        _ => Ok(SiteConfig::default()),
    }
}

/// Attach every component to the current document
///
/// `config_json` optionally overrides selectors and ids (camelCase keys).
/// Call once per page load.
#[wasm_bindgen(js_name = mountSite)]
pub fn mount_site(config_json: Option<String>) -> Result<JsValue, JsValue> {
    let config = parse_config(config_json.as_deref()).map_err(|e| JsValue::from_str(&e))?;
    let document = dom::document()?;
    remember_storage_key(&config.storage_key);

    let report = MountReport {
        nav: nav::mount(&document, &config)?,
        form: form::mount(&document, &config)?.is_some(),
        anchors: scroll::mount(&document, &config)?,
        modal: modal::mount(&document, &config)?.is_some(),
    };

    web_sys::console::log_1(
        &format!(
            "Site mounted: nav={} form={} anchors={} modal={}",
            report.nav, report.form, report.anchors, report.modal
        )
        .into(),
    );

    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Stored applications as a JSON array string
///
/// Without `storage_key` this reads the key the page was mounted with.
#[wasm_bindgen(js_name = storedSubmissions)]
pub fn stored_submissions(storage_key: Option<String>) -> Result<String, JsValue> {
    let key = resolve_storage_key(storage_key);
    let log =
        SubmissionLog::load(&LocalStore, &key).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(log.to_json())
}

fn validation_json(payload_json: &str) -> Result<String, String> {
    let payload: ApplicationPayload = serde_json::from_str(payload_json)
        .map_err(|e| format!("Failed to parse payload: {}", e))?;
    Ok(validate_payload(&payload).to_json())
}

/// Per-field validity for a JSON payload, as a `{ field: bool }` JSON map
#[wasm_bindgen(js_name = validateApplication)]
pub fn validate_application(payload_json: &str) -> Result<String, JsValue> {
    validation_json(payload_json).map_err(|e| JsValue::from_str(&e))
}
