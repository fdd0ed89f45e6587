//! Application form submit state machine
//!
//! Each submit validates and settles as rejected or accepted inside a single
//! call, and the controller is idle again when it returns. The settled branch
//! is reported through [`SubmitOutcome`]; nothing from a rejected attempt is
//! kept apart from the inline errors already written to the view.

use crate::config::SiteConfig;
use crate::error::Result;
use crate::payload::{ApplicationPayload, SubmissionRecord};
use crate::storage::KeyValueStore;
use crate::submission_log::SubmissionLog;
use crate::validation::{validate_payload, Field, ValidationReport, APPLICATION_RULES};
use chrono::{DateTime, Utc};

pub const REJECTED_MESSAGE: &str = "Please fix the highlighted fields and try again.";
pub const ACCEPTED_MESSAGE: &str =
    "Application submitted. A confirmation email will be sent after review.";

/// Element handles the form drives
pub trait FormView {
    /// Current value of a text control, `None` if the control is absent
    fn read_text(&self, field: Field) -> Option<String>;

    /// Checked state of a checkbox control, `None` if absent
    fn read_checked(&self, field: Field) -> Option<bool>;

    /// Write inline error text; a missing slot is skipped silently
    fn set_field_error(&mut self, field: Field, message: &str);

    fn set_status(&mut self, text: &str, color: &str);

    /// Restore every control to its default value
    fn reset(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Error,
    Success,
}

impl StatusTone {
    pub fn message(&self) -> &'static str {
        match self {
            StatusTone::Error => REJECTED_MESSAGE,
            StatusTone::Success => ACCEPTED_MESSAGE,
        }
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rejected { invalid: Vec<Field> },
    Accepted { record: SubmissionRecord, log_len: usize },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Form controller bound to a submission store
pub struct ApplicationForm<S> {
    store: S,
    storage_key: String,
    error_color: String,
    success_color: String,
}

impl<S: KeyValueStore> ApplicationForm<S> {
    pub fn new(store: S, config: &SiteConfig) -> Self {
        Self {
            store,
            storage_key: config.storage_key.clone(),
            error_color: config.error_color.clone(),
            success_color: config.success_color.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Currently stored submissions
    pub fn submissions(&self) -> Result<SubmissionLog> {
        SubmissionLog::load(&self.store, &self.storage_key)
    }

    /// Build a payload from the view; missing controls read as empty/unchecked
    pub fn collect<V: FormView + ?Sized>(view: &V) -> ApplicationPayload {
        let mut payload = ApplicationPayload::default();
        for field in Field::ALL {
            if field.is_checkbox() {
                payload.consent = view.read_checked(field).unwrap_or(false);
            } else {
                payload.set_text(field, view.read_text(field).unwrap_or_default());
            }
        }
        payload
    }

    /// Handle one submit event
    ///
    /// `now` is the acceptance timestamp recorded on success.
    ///
    /// # Errors
    /// Returns an error only if the store fails while persisting an accepted
    /// application; the view is left unreset in that case.
    pub fn submit<V: FormView + ?Sized>(
        &mut self,
        view: &mut V,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome> {
        let payload = Self::collect(&*view);
        let report = validate_payload(&payload);
        render_errors(view, &report);

        if report.is_valid() {
            self.accept(view, payload, now)
        } else {
            Ok(self.reject(view, &report))
        }
    }

    fn reject<V: FormView + ?Sized>(
        &self,
        view: &mut V,
        report: &ValidationReport,
    ) -> SubmitOutcome {
        let invalid = report.invalid_fields();
        tracing::debug!(?invalid, "Application rejected");
        view.set_status(StatusTone::Error.message(), &self.error_color);
        SubmitOutcome::Rejected { invalid }
    }

    fn accept<V: FormView + ?Sized>(
        &mut self,
        view: &mut V,
        payload: ApplicationPayload,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome> {
        let record = SubmissionRecord::new(payload, now);
        let log = SubmissionLog::append(&mut self.store, &self.storage_key, &record)
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to persist application"))?;

        tracing::info!(total = log.len(), ts = %record.ts, "Application stored");

        view.reset();
        view.set_status(StatusTone::Success.message(), &self.success_color);
        Ok(SubmitOutcome::Accepted {
            record,
            log_len: log.len(),
        })
    }
}

/// Write the inline message for every validated field
fn render_errors<V: FormView + ?Sized>(view: &mut V, report: &ValidationReport) {
    for rule in APPLICATION_RULES.iter() {
        view.set_field_error(rule.field, report.message(rule.field));
    }
}
