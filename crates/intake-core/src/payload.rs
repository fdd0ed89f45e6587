//! Application payload and stored submission records

use crate::validation::Field;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One application as collected from the form controls
///
/// Field names serialize in camelCase so stored records keep the same keys
/// as the form control ids (`fundingLane`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationPayload {
    pub name: String,
    pub email: String,
    pub affiliation: String,
    pub cohort: String,
    pub stage: String,
    pub trl: String,
    pub problem: String,
    pub solution: String,
    pub ip: String,
    pub reg: String,
    pub funding_lane: String,
    pub ask: String,
    pub consent: bool,
}

/// A field value as seen by a validation predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl ApplicationPayload {
    /// Look up the value of one field
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        let text = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Affiliation => &self.affiliation,
            Field::Cohort => &self.cohort,
            Field::Stage => &self.stage,
            Field::Trl => &self.trl,
            Field::Problem => &self.problem,
            Field::Solution => &self.solution,
            Field::Ip => &self.ip,
            Field::Reg => &self.reg,
            Field::FundingLane => &self.funding_lane,
            Field::Ask => &self.ask,
            Field::Consent => return FieldValue::Flag(self.consent),
        };
        FieldValue::Text(text)
    }

    /// Set a text field; `Consent` is ignored here, use `consent` directly
    pub fn set_text(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Affiliation => &mut self.affiliation,
            Field::Cohort => &mut self.cohort,
            Field::Stage => &mut self.stage,
            Field::Trl => &mut self.trl,
            Field::Problem => &mut self.problem,
            Field::Solution => &mut self.solution,
            Field::Ip => &mut self.ip,
            Field::Reg => &mut self.reg,
            Field::FundingLane => &mut self.funding_lane,
            Field::Ask => &mut self.ask,
            Field::Consent => return,
        };
        *slot = value;
    }
}

/// An accepted application as persisted in the submission log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(flatten)]
    pub payload: ApplicationPayload,
    /// ISO-8601 UTC acceptance time, millisecond precision
    pub ts: String,
}

impl SubmissionRecord {
    pub fn new(payload: ApplicationPayload, accepted_at: DateTime<Utc>) -> Self {
        Self {
            payload,
            ts: accepted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Parse the stored timestamp back into a UTC instant
    pub fn accepted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.ts)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
