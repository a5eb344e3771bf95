//! Domain types and validators for inventory configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_CACHE_PATH: &str = "/tmp/scalr.json";
pub const DEFAULT_COMMAND: &str = "terraform";
pub const DEFAULT_ARGS: &[&str] = &["-chdir=infra", "output", "-json"];

const CHDIR_PREFIX: &str = "-chdir=";

// ── Config schema ────────────────────────────────────────────────────────────

/// Where provisioning output is cached and how to produce it when it is not.
///
/// Stored as YAML; every field is optional and falls back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Cache file holding the provisioning tool's raw JSON output.
    pub cache_path: PathBuf,
    /// Provisioning tool executable.
    pub command: String,
    /// Arguments that make the tool print its outputs as JSON on stdout.
    pub args: Vec<String>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            command: DEFAULT_COMMAND.to_string(),
            args: DEFAULT_ARGS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Command-line / environment overrides, applied on top of the file config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub cache_path: Option<PathBuf>,
    pub command: Option<String>,
    pub chdir: Option<String>,
}

impl InventoryConfig {
    /// Apply overrides; `chdir` replaces an existing `-chdir=` argument or is
    /// prepended when there is none.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(path) = overrides.cache_path {
            self.cache_path = path;
        }
        if let Some(command) = overrides.command {
            self.command = command;
        }
        if let Some(dir) = overrides.chdir {
            let arg = format!("{CHDIR_PREFIX}{dir}");
            match self.args.iter_mut().find(|a| a.starts_with(CHDIR_PREFIX)) {
                Some(existing) => *existing = arg,
                None => self.args.insert(0, arg),
            }
        }
        self
    }

    /// The command line as one string, for logs and error messages.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a loaded configuration before it is used.
///
/// # Errors
///
/// Returns an error if the command or the cache path is empty.
pub fn validate_config(config: &InventoryConfig) -> Result<(), ConfigError> {
    if config.command.trim().is_empty() {
        return Err(ConfigError::EmptyCommand);
    }
    if config.cache_path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyCachePath);
    }
    Ok(())
}
