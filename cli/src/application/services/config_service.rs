//! Application service — configuration use-cases.

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::InventoryConfig;
use crate::domain::config::{ConfigOverrides, validate_config};

/// Load the file configuration, apply overrides, and validate the result.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the resulting
/// configuration is invalid.
pub fn resolve_config(
    store: &impl ConfigStore,
    overrides: ConfigOverrides,
) -> Result<InventoryConfig> {
    let config = store.load()?.with_overrides(overrides);
    validate_config(&config).context("invalid inventory configuration")?;
    tracing::debug!(
        cache = %config.cache_path.display(),
        command = %config.command_line(),
        "resolved configuration"
    );
    Ok(config)
}
