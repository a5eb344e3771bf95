//! Unit tests for configuration resolution.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use scalr_inventory::app::AppContext;
use scalr_inventory::application::services::config_service::resolve_config;
use scalr_inventory::domain::config::ConfigOverrides;
use scalr_inventory::domain::{ConfigError, InventoryConfig};

use crate::mocks::{BrokenConfigStore, FixedConfigStore};

#[test]
fn test_overrides_win_over_file() {
    let store = FixedConfigStore(InventoryConfig {
        cache_path: PathBuf::from("/srv/file.json"),
        command: "tofu".to_string(),
        args: vec!["output".to_string(), "-json".to_string()],
    });

    let cfg = resolve_config(
        &store,
        ConfigOverrides {
            cache_path: Some(PathBuf::from("/tmp/flag.json")),
            command: None,
            chdir: Some("stacks/web".to_string()),
        },
    )
    .expect("resolve");

    assert_eq!(cfg.cache_path, PathBuf::from("/tmp/flag.json"));
    assert_eq!(cfg.command_line(), "tofu -chdir=stacks/web output -json");
}

#[test]
fn test_empty_command_is_rejected() {
    let store = FixedConfigStore(InventoryConfig::default());

    let err = resolve_config(
        &store,
        ConfigOverrides {
            command: Some(String::new()),
            ..ConfigOverrides::default()
        },
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "invalid inventory configuration");
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::EmptyCommand)
    );
}

#[test]
fn test_broken_config_file_is_fatal() {
    let err = resolve_config(&BrokenConfigStore, ConfigOverrides::default()).unwrap_err();
    assert!(err.to_string().starts_with("cannot parse"));
}

#[test]
fn test_app_context_uses_resolved_cache_path() {
    let store = FixedConfigStore(InventoryConfig::default());
    let app = AppContext::new(
        &store,
        ConfigOverrides {
            cache_path: Some(PathBuf::from("/tmp/ctx.json")),
            ..ConfigOverrides::default()
        },
    )
    .expect("context");

    assert_eq!(app.cache.path(), PathBuf::from("/tmp/ctx.json"));
}
