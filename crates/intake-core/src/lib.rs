//! Application intake and patent showcase logic
//!
//! This crate holds everything the landing page does that is not a raw DOM
//! call: field validation, the submit state machine, the submission log,
//! the patent modal state machine, nav toggling and anchor scrolling.
//!
//! ## Architecture
//!
//! Components never touch the browser directly. Each one drives a small
//! view trait (`NavView`, `FormView`, `ScrollView`, `ModalView`) and, for
//! persistence, a `KeyValueStore`. The `intake-web` wasm crate implements
//! those traits over `web-sys` elements; tests implement them in memory.
//!
//! ## Usage
//!
//! ```
//! use intake_core::{validate_payload, ApplicationPayload};
//!
//! let payload = ApplicationPayload {
//!     name: "Ada Lovelace".into(),
//!     email: "ada@engine.org".into(),
//!     affiliation: "Analytical".into(),
//!     cohort: "2025".into(),
//!     stage: "prototype".into(),
//!     trl: "4".into(),
//!     funding_lane: "grant".into(),
//!     consent: true,
//!     ..Default::default()
//! };
//! assert!(validate_payload(&payload).is_valid());
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod modal;
pub mod nav;
pub mod patent;
pub mod payload;
pub mod scroll;
pub mod storage;
pub mod submission_log;
pub mod validation;

pub use config::SiteConfig;
pub use error::{IntakeError, Result};
pub use form::{ApplicationForm, FormView, StatusTone, SubmitOutcome};
pub use modal::{CloseTrigger, ModalView, ModalVisibility, PatentModal};
pub use nav::{NavToggle, NavView};
pub use patent::{CardData, ModalContent, PatentInfo};
pub use payload::{ApplicationPayload, FieldValue, SubmissionRecord};
pub use scroll::{fragment_selector, ScrollOutcome, ScrollView, SmoothScroll};
pub use storage::{KeyValueStore, MemoryStore};
pub use submission_log::SubmissionLog;
pub use validation::{
    is_js_whitespace, is_valid_email, trim_js, validate, validate_payload, Field, FieldRule,
    ValidationReport, APPLICATION_RULES, INVALID_FIELD_MESSAGE,
};
