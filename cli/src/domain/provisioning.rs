//! Provisioning-tool output as produced by `terraform output -json`.
//!
//! Pure parsing only — the bytes come from the cache file or the captured
//! stdout of the provisioning command.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::error::InventoryError;

/// Top-level output map: output name to its record (`{"value": ..., ...}`).
///
/// Keys other than the ones the extractor asks for are carried along and
/// ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProvisioningOutput {
    outputs: BTreeMap<String, Value>,
}

impl ProvisioningOutput {
    /// Parse raw JSON bytes.
    ///
    /// `origin` names where the bytes came from (cache path or command) and
    /// only appears in the error message.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Parse`] if the bytes are not JSON or the
    /// top-level value is not an object.
    pub fn parse(raw: &[u8], origin: &str) -> Result<Self, InventoryError> {
        let value: Value = serde_json::from_slice(raw).map_err(|e| InventoryError::Parse {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;
        match value {
            Value::Object(map) => Ok(Self {
                outputs: map.into_iter().collect(),
            }),
            other => Err(InventoryError::Parse {
                origin: origin.to_string(),
                reason: format!("expected a JSON object, got {}", json_kind(&other)),
            }),
        }
    }

    /// Look up the `value` field of output `key`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::FieldMissing`] if the output is absent and
    /// [`InventoryError::ValueMissing`] if it has no `value` field.
    pub fn value(&self, key: &str) -> Result<&Value, InventoryError> {
        let record = self.outputs.get(key).ok_or_else(|| InventoryError::FieldMissing {
            key: key.to_string(),
        })?;
        record.get("value").ok_or_else(|| InventoryError::ValueMissing {
            key: key.to_string(),
        })
    }

    /// Number of outputs present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

/// Human name of a JSON value's type, for diagnostics.
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
