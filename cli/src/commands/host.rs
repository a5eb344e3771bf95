//! `--host <name>` — print one host's variables.
//!
//! The `--list` response already carries `_meta.hostvars`, so consumers do
//! not normally call this; it exists to honour the dynamic-inventory
//! protocol and answers `{}` for every host.

use std::io::Write;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::inventory;
use crate::output::json;

/// Run the host command for `host`, writing its variables to `out`.
///
/// # Errors
///
/// Returns an error if the inventory cannot be generated or written.
pub async fn run(app: &AppContext, host: &str, out: &mut impl Write) -> Result<()> {
    let doc = inventory::generate(&app.config, &app.cache, &app.runner).await?;
    if !doc.meta.hostvars.contains_key(host) {
        tracing::debug!(host, "host not in inventory");
    }
    json::emit(out, &doc.host_vars(host))
}
