//! `--list` — print the full inventory document.

use std::io::Write;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::inventory;
use crate::output::json;

/// Run the list command, writing the document to `out`.
///
/// # Errors
///
/// Returns an error if the inventory cannot be generated or written.
pub async fn run(app: &AppContext, out: &mut impl Write) -> Result<()> {
    let doc = inventory::generate(&app.config, &app.cache, &app.runner).await?;
    json::emit(out, &doc)
}
