//! Application service — the acquire → extract → build pipeline.

use anyhow::Result;

use crate::application::ports::{CommandRunner, OutputCache};
use crate::application::services::acquire::acquire;
use crate::domain::{HostRecord, InventoryConfig, InventoryDocument};

/// Produce the inventory document for the current provisioning state.
///
/// # Errors
///
/// Returns an error if acquisition or extraction fails. No partial document
/// is ever returned.
pub async fn generate(
    config: &InventoryConfig,
    cache: &impl OutputCache,
    runner: &impl CommandRunner,
) -> Result<InventoryDocument> {
    let output = acquire(config, cache, runner).await?;
    let record = HostRecord::extract(&output)?;
    tracing::debug!(host = %record.name, address = %record.address, "extracted host record");
    Ok(InventoryDocument::build(&record))
}
