//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;

use crate::domain::InventoryConfig;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so acquisition can be tested without spawning
/// the provisioning tool.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its stdout.
    ///
    /// Stderr is passed through to the caller's terminal, so `Output::stderr`
    /// is empty. There is no timeout: the call returns when the program exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on. A
    /// non-zero exit is NOT an error here; callers inspect `Output::status`.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Output Cache Port ─────────────────────────────────────────────────────────

/// Result of persisting freshly captured provisioning output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The cache entry did not exist and now holds the bytes.
    Created,
    /// Someone else created the entry first; it was left untouched.
    AlreadyPresent,
}

/// Persisted copy of the provisioning tool's last output.
///
/// The cache is never rewritten or truncated once present.
#[allow(async_fn_in_trait)]
pub trait OutputCache {
    /// Human-readable location (a path for the file-backed cache).
    fn location(&self) -> String;

    /// Read the cached bytes, or `None` when nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exists but cannot be read.
    async fn load(&self) -> Result<Option<Vec<u8>>>;

    /// Persist `raw` only if no entry exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be created or written.
    async fn store(&self, raw: &[u8]) -> Result<StoreOutcome>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading of the inventory configuration file.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<InventoryConfig>;

    /// Path of the configuration file (whether or not it exists).
    ///
    /// # Errors
    ///
    /// Returns an error if no path can be determined.
    fn path(&self) -> Result<PathBuf>;
}
