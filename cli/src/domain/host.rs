//! Host record extraction from provisioning output.

use serde_json::Value;

use crate::domain::error::InventoryError;
use crate::domain::provisioning::{ProvisioningOutput, json_kind};

/// Output holding the host's public address.
pub const ADDRESS_OUTPUT: &str = "web_public_ip";
/// Output holding the SSH login user.
pub const USER_OUTPUT: &str = "web_user";
/// Output holding the inventory host name.
pub const NAME_OUTPUT: &str = "web_name";

/// The minimal description of one managed machine.
///
/// Address and user are passed through as whatever JSON the provisioning
/// tool reported. The name keys `_meta.hostvars`, so it must be a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub address: Value,
    pub user: Value,
    pub name: String,
}

impl HostRecord {
    /// Extract the host record from the three `web_*` outputs.
    ///
    /// # Errors
    ///
    /// Returns an [`InventoryError`] if any output or its `value` is missing,
    /// or the name cannot serve as a host name. No partial record is produced.
    pub fn extract(output: &ProvisioningOutput) -> Result<Self, InventoryError> {
        Ok(Self {
            address: output.value(ADDRESS_OUTPUT)?.clone(),
            user: output.value(USER_OUTPUT)?.clone(),
            name: host_name(output.value(NAME_OUTPUT)?)?,
        })
    }
}

/// Strings are used as-is; numbers and booleans are rendered the way a JSON
/// object key would be. Anything else has no usable key form.
fn host_name(value: &Value) -> Result<String, InventoryError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(InventoryError::NotAString {
            key: NAME_OUTPUT.to_string(),
            kind: json_kind(other).to_string(),
        }),
    }
}
