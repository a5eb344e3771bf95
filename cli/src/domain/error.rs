//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Inventory errors ──────────────────────────────────────────────────────────

/// Errors raised while turning provisioning output into an inventory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("provisioning command '{command}' failed ({status})")]
    CommandFailed { command: String, status: String },

    #[error("cannot parse provisioning output from {origin}: {reason}")]
    Parse { origin: String, reason: String },

    #[error("provisioning output '{key}' not found")]
    FieldMissing { key: String },

    #[error("provisioning output '{key}' has no 'value' field")]
    ValueMissing { key: String },

    #[error("provisioning output '{key}' must be a string, got {kind}")]
    NotAString { key: String, kind: String },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to inventory configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Provisioning command must not be empty")]
    EmptyCommand,

    #[error("Cache path must not be empty")]
    EmptyCachePath,
}
