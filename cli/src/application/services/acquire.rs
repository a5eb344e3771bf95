//! Application service — obtain provisioning output from cache or the
//! provisioning tool.
//!
//! The only branch in the pipeline: a present cache entry wins
//! unconditionally and the tool is never run. Otherwise the tool is run once,
//! its stdout persisted verbatim, and parsed.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, OutputCache, StoreOutcome};
use crate::domain::{InventoryConfig, InventoryError, ProvisioningOutput};

/// Acquire and parse provisioning output.
///
/// # Errors
///
/// Returns an error if the cache cannot be read, the command cannot be
/// spawned or exits non-zero, the output cannot be persisted, or the JSON is
/// malformed. Nothing is persisted when the command fails.
pub async fn acquire(
    config: &InventoryConfig,
    cache: &impl OutputCache,
    runner: &impl CommandRunner,
) -> Result<ProvisioningOutput> {
    if let Some(raw) = cache.load().await? {
        tracing::debug!(
            cache = %cache.location(),
            bytes = raw.len(),
            "using cached provisioning output"
        );
        return Ok(ProvisioningOutput::parse(&raw, &cache.location())?);
    }

    let command_line = config.command_line();
    tracing::debug!(
        cache = %cache.location(),
        command = %command_line,
        "cache miss, running provisioning command"
    );

    let raw = run_provisioner(config, runner).await?;

    match cache.store(&raw).await? {
        StoreOutcome::Created => {
            tracing::info!(
                cache = %cache.location(),
                bytes = raw.len(),
                "cached provisioning output"
            );
        }
        StoreOutcome::AlreadyPresent => {
            tracing::warn!(
                cache = %cache.location(),
                "cache was created concurrently, leaving it untouched"
            );
        }
    }

    Ok(ProvisioningOutput::parse(&raw, &command_line)?)
}

/// Run the configured command and return its stdout.
async fn run_provisioner(
    config: &InventoryConfig,
    runner: &impl CommandRunner,
) -> Result<Vec<u8>> {
    let args: Vec<&str> = config.args.iter().map(String::as_str).collect();
    let output = runner
        .run(&config.command, &args)
        .await
        .with_context(|| format!("running {}", config.command_line()))?;

    if !output.status.success() {
        return Err(InventoryError::CommandFailed {
            command: config.command_line(),
            status: output.status.to_string(),
        }
        .into());
    }
    Ok(output.stdout)
}
