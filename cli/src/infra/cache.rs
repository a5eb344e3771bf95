//! File-backed implementation of the `OutputCache` port.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::application::ports::{OutputCache, StoreOutcome};

/// Caches provisioning output in a single JSON file.
///
/// The file only ever appears complete and is never truncated, so a file
/// that appears between `load` and `store` wins.
pub struct FileOutputCache {
    path: PathBuf,
}

impl FileOutputCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputCache for FileOutputCache {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                let msg = format!("cannot read cache file {}", self.path.display());
                Err(e).context(msg)
            }
        }
    }

    async fn store(&self, raw: &[u8]) -> Result<StoreOutcome> {
        let path = self.path.clone();
        let raw = raw.to_vec();
        tokio::task::spawn_blocking(move || persist_new(&path, &raw))
            .await
            .context("spawn_blocking for cache store")?
    }
}

/// Write `raw` to a temp file next to `path`, then move it into place only if
/// `path` does not exist. A failed write leaves nothing at `path`.
fn persist_new(path: &Path, raw: &[u8]) -> Result<StoreOutcome> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
            parent
        }
        None => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("cannot create temp file in {}", dir.display()))?;
    tmp.write_all(raw)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("cannot write cache file {}", path.display()))?;

    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(StoreOutcome::Created),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(StoreOutcome::AlreadyPresent),
        Err(e) => {
            let msg = format!("cannot create cache file {}", path.display());
            Err(e.error).context(msg)
        }
    }
}
