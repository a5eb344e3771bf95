//! Inventory document in the shape Ansible's dynamic-inventory protocol
//! expects from `--list`.
//!
//! Field declaration order is serialization order, so the rendered JSON is
//! stable: `all` (`hosts`, `vars`) first, then `_meta`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::host::HostRecord;

/// Interpreter every managed host is told to use.
pub const PYTHON_INTERPRETER: &str = "/usr/bin/python3";

/// Complete `--list` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryDocument {
    pub all: AllGroup,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

/// The implicit `all` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllGroup {
    pub hosts: Vec<String>,
    pub vars: ConnectionVars,
}

/// Group-level connection variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionVars {
    pub ansible_host: Value,
    pub ansible_user: Value,
    pub ansible_python_interpreter: String,
}

/// `_meta` block; its presence tells the consumer not to call `--host`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

/// Per-host variables. Always empty; serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostVars {}

impl InventoryDocument {
    /// Build the single-host inventory for `record`.
    #[must_use]
    pub fn build(record: &HostRecord) -> Self {
        Self {
            all: AllGroup {
                hosts: vec![record.name.clone()],
                vars: ConnectionVars {
                    ansible_host: record.address.clone(),
                    ansible_user: record.user.clone(),
                    ansible_python_interpreter: PYTHON_INTERPRETER.to_string(),
                },
            },
            meta: Meta {
                hostvars: BTreeMap::from([(record.name.clone(), HostVars::default())]),
            },
        }
    }

    /// Variables for `host`, as answered to `--host <name>`.
    ///
    /// Unknown hosts get an empty set, same as the known one.
    #[must_use]
    pub fn host_vars(&self, host: &str) -> HostVars {
        self.meta.hostvars.get(host).cloned().unwrap_or_default()
    }
}
