//! Page wiring configuration
//!
//! Every element the components bind to is addressed through this struct,
//! so a page with different markup can pass a JSON override instead of
//! patching the code. Missing keys keep their defaults.

use crate::error::{IntakeError, Result};
use crate::validation::Field;
use serde::{Deserialize, Serialize};

/// Selectors, ids and constants used to mount the page components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Mobile nav trigger
    pub hamburger_selector: String,
    /// Nav panel toggled by the trigger
    pub nav_selector: String,

    /// Application form id
    pub form_id: String,
    /// Status message element id
    pub status_id: String,
    /// Class of the inline per-field error slots
    pub error_slot_class: String,
    /// Local storage key for the submission log
    pub storage_key: String,
    /// Status colour for a rejected submit
    pub error_color: String,
    /// Status colour for an accepted submit
    pub success_color: String,

    /// In-page anchors handled by smooth scrolling
    pub anchor_selector: String,

    /// Modal root id
    pub modal_id: String,
    pub modal_image_id: String,
    pub modal_title_id: String,
    pub modal_abstract_id: String,
    pub modal_number_id: String,
    pub modal_inventor_id: String,
    pub modal_filing_id: String,
    pub modal_status_id: String,
    /// Close control inside the modal
    pub close_selector: String,
    /// Class toggled on the modal root while open
    pub open_class: String,
    /// Buttons that open the modal
    pub details_selector: String,
    /// Card ancestor carrying the `data-*` attributes
    pub card_selector: String,
    /// Card paragraph used as the title
    pub card_description_selector: String,
    /// Card logo used as the fallback image
    pub card_logo_selector: String,
    /// Image shown when a card has none
    pub placeholder_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hamburger_selector: ".hamburger".to_string(),
            nav_selector: ".nav".to_string(),
            form_id: "applyForm".to_string(),
            status_id: "formStatus".to_string(),
            error_slot_class: "err".to_string(),
            storage_key: "ffl_submissions".to_string(),
            error_color: "#ff7b7b".to_string(),
            success_color: "#00d68f".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            modal_id: "patentModal".to_string(),
            modal_image_id: "modalImage".to_string(),
            modal_title_id: "modalTitle".to_string(),
            modal_abstract_id: "modalAbstract".to_string(),
            modal_number_id: "modalNumber".to_string(),
            modal_inventor_id: "modalInventor".to_string(),
            modal_filing_id: "modalFiling".to_string(),
            modal_status_id: "modalStatus".to_string(),
            close_selector: ".modal-close".to_string(),
            open_class: "open".to_string(),
            details_selector: ".details-button".to_string(),
            card_selector: ".patent-card".to_string(),
            card_description_selector: ".patent-info p".to_string(),
            card_logo_selector: ".patent-logo img".to_string(),
            placeholder_image: "./Patent Partners_Logo.png".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override
    ///
    /// # Errors
    /// Returns `IntakeError::Config` if the document is not a JSON object
    /// with string values for the keys it sets.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| IntakeError::Config(e.to_string()))
    }

    /// Selector for the inline error slot of `field`
    pub fn error_slot_selector(&self, field: Field) -> String {
        format!(".{}[data-for=\"{}\"]", self.error_slot_class, field.as_str())
    }
}
