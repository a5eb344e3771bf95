//! JSON emitter for inventory responses.
//!
//! The document is rendered into a buffer first and written in one call, so
//! a serialization failure never leaves half a document on stdout.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// Render `value` as indented JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render<T: Serialize>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("cannot serialize inventory")?;
    text.push('\n');
    Ok(text)
}

/// Render `value` and write it to `out`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn emit<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    let text = render(value)?;
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("cannot write inventory to stdout")
}
