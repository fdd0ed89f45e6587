//! Append-only log of accepted applications
//!
//! The log lives under a single key as a JSON array. Entries are kept as raw
//! JSON values so records written by older page versions survive a
//! read-modify-write untouched.

use crate::error::{IntakeError, Result};
use crate::payload::SubmissionRecord;
use crate::storage::KeyValueStore;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionLog {
    entries: Vec<Value>,
}

impl SubmissionLog {
    /// Parse stored content; anything but a JSON array reads as empty
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(entries)) => Self { entries },
            Ok(other) => {
                tracing::warn!(
                    kind = json_kind(&other),
                    "Stored submission log is not an array, starting fresh"
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored submission log is unreadable, starting fresh");
                Self::default()
            }
        }
    }

    /// Load the log stored under `key`
    ///
    /// A missing key or malformed content yields an empty log; only a
    /// failing store is an error.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Self> {
        Ok(store
            .get(key)?
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default())
    }

    /// Write the log back under `key`
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, key: &str) -> Result<()> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| IntakeError::Serialization(e.to_string()))?;
        store.set(key, &json)
    }

    pub fn push(&mut self, record: &SubmissionRecord) -> Result<()> {
        let value =
            serde_json::to_value(record).map_err(|e| IntakeError::Serialization(e.to_string()))?;
        self.entries.push(value);
        Ok(())
    }

    /// Read-modify-write one record onto the stored log
    pub fn append<S: KeyValueStore + ?Sized>(
        store: &mut S,
        key: &str,
        record: &SubmissionRecord,
    ) -> Result<Self> {
        let mut log = Self::load(store, key)?;
        log.push(record)?;
        log.save(store, key)?;
        Ok(log)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that parse as submission records, in submission order
    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.entries
            .iter()
            .filter_map(|v| serde_json::from_value(v.clone()).ok())
            .collect()
    }

    pub fn to_json(&self) -> String {
        Value::Array(self.entries.clone()).to_string()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
