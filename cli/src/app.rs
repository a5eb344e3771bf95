//! Application context — unified state passed to every command handler.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::application::services::config_service;
use crate::domain::InventoryConfig;
use crate::domain::config::ConfigOverrides;
use crate::infra::{FileOutputCache, TokioCommandRunner};

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` from the resolved configuration.
pub struct AppContext {
    /// Resolved configuration (file, then flags / environment).
    pub config: InventoryConfig,
    /// Provisioning output cache at `config.cache_path`.
    pub cache: FileOutputCache,
    /// Runs the provisioning tool on a cache miss.
    pub runner: TokioCommandRunner,
}

impl AppContext {
    /// Construct an `AppContext` from a config store and overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub fn new(store: &impl ConfigStore, overrides: ConfigOverrides) -> Result<Self> {
        let config = config_service::resolve_config(store, overrides)?;
        Ok(Self::from_config(config))
    }

    /// Construct an `AppContext` around an already resolved configuration.
    #[must_use]
    pub fn from_config(config: InventoryConfig) -> Self {
        Self {
            cache: FileOutputCache::new(config.cache_path.clone()),
            runner: TokioCommandRunner,
            config,
        }
    }
}
