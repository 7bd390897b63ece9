//! Schema-validated decoding of fetched list payloads.
//!
//! `RecordIntake<T>` turns the JSON a list endpoint returns into a
//! `Vec<T>`. Decoding runs in two phases per element:
//!
//! 1. **Structural**: the element is validated against the entity's JSON
//!    Schema using the `jsonschema` crate.
//! 2. **Typed**: the element is deserialized into `T` with serde.
//!
//! An element failing either phase is skipped and recorded as an
//! `IntakeFailure`; the rest of the list is still delivered.

use std::{marker::PhantomData, path::Path};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use clinic_contracts::{
    error::{ClinicError, ClinicResult},
    intake::{IntakeFailure, IntakeReport},
};

/// Object keys a backend may wrap its list in, tried in this order.
pub const ENVELOPE_KEYS: &[&str] = &["data", "content", "items", "records"];

/// Decoder for one entity type.
pub struct RecordIntake<T> {
    schema_id: String,
    validator: jsonschema::Validator,
    _record: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> RecordIntake<T> {
    /// Compile `json_schema` into a decoder for `T`.
    ///
    /// Returns `ClinicError::SchemaValidation` if the schema document itself
    /// is invalid.
    pub fn new(schema_id: impl Into<String>, json_schema: &Value) -> ClinicResult<Self> {
        let schema_id = schema_id.into();
        let validator =
            jsonschema::validator_for(json_schema).map_err(|e| ClinicError::SchemaValidation {
                reason: format!("invalid JSON Schema document '{}': {}", schema_id, e),
            })?;

        Ok(Self {
            schema_id,
            validator,
            _record: PhantomData,
        })
    }

    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    /// Decode an already parsed payload.
    ///
    /// The payload must be an array, or an object holding the array under
    /// one of `ENVELOPE_KEYS`. Anything else is `ClinicError::Intake`.
    pub fn decode_value(&self, payload: &Value) -> ClinicResult<IntakeReport<T>> {
        let items = extract_items(payload).ok_or_else(|| ClinicError::Intake {
            reason: format!(
                "payload for '{}' is neither a list nor a known list envelope",
                self.schema_id
            ),
        })?;

        let mut records = Vec::with_capacity(items.len());
        let mut failures = Vec::new();

        for (index, item) in items.iter().enumerate() {
            match self.decode_item(item) {
                Ok(record) => records.push(record),
                Err(message) => {
                    warn!(schema_id = %self.schema_id, index, %message, "record skipped at intake");
                    failures.push(IntakeFailure { index, message });
                }
            }
        }

        debug!(
            schema_id = %self.schema_id,
            accepted = records.len(),
            skipped = failures.len(),
            "payload decoded"
        );

        Ok(IntakeReport { records, failures })
    }

    /// Parse `text` as JSON, then decode it.
    pub fn decode_str(&self, text: &str) -> ClinicResult<IntakeReport<T>> {
        let payload: Value = serde_json::from_str(text).map_err(|e| ClinicError::Intake {
            reason: format!("payload for '{}' is not valid JSON: {}", self.schema_id, e),
        })?;
        self.decode_value(&payload)
    }

    /// Read and decode a JSON file.
    pub fn decode_file(&self, path: &Path) -> ClinicResult<IntakeReport<T>> {
        let text = std::fs::read_to_string(path).map_err(|e| ClinicError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        self.decode_str(&text)
    }

    fn decode_item(&self, item: &Value) -> Result<T, String> {
        // Collect every structural violation so the report is complete.
        let violations: Vec<String> = self
            .validator
            .iter_errors(item)
            .map(|error| format!("JSON Schema violation at {}: {}", error.instance_path, error))
            .collect();
        if !violations.is_empty() {
            return Err(violations.join("; "));
        }

        serde_json::from_value(item.clone()).map_err(|e| format!("cannot decode record: {e}"))
    }
}

fn extract_items(payload: &Value) -> Option<&Vec<Value>> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}
