//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod host;
pub mod inventory;
pub mod provisioning;

pub use config::InventoryConfig;
pub use error::{ConfigError, InventoryError};
pub use host::HostRecord;
pub use inventory::{HostVars, InventoryDocument, PYTHON_INTERPRETER};
pub use provisioning::ProvisioningOutput;
