//! Unit tests for the full generate pipeline and the command handlers.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use scalr_inventory::application::services::inventory::generate;
use scalr_inventory::domain::{InventoryConfig, InventoryError};
use scalr_inventory::output::json;

use crate::mocks::{FakeRunner, MemoryCache, OTHER_OUTPUT, VALID_OUTPUT};

const EXPECTED: &str = r#"{"all": {"hosts": ["nginx-web-01"], "vars": {"ansible_host": "203.0.113.10", "ansible_user": "ubuntu", "ansible_python_interpreter": "/usr/bin/python3"}}, "_meta": {"hostvars": {"nginx-web-01": {}}}}"#;

#[tokio::test]
async fn test_generate_matches_expected_document() {
    let cache = MemoryCache::holding(VALID_OUTPUT);
    let doc = generate(&InventoryConfig::default(), &cache, &FakeRunner::failing(1))
        .await
        .expect("generate");

    let actual = serde_json::to_value(&doc).unwrap();
    let expected: serde_json::Value = serde_json::from_str(EXPECTED).unwrap();
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn test_generate_reflects_cache_not_command() {
    let cache = MemoryCache::holding(OTHER_OUTPUT);
    let runner = FakeRunner::succeeding(VALID_OUTPUT);

    let doc = generate(&InventoryConfig::default(), &cache, &runner)
        .await
        .expect("generate");

    assert_eq!(doc.all.hosts, vec!["cached-web".to_string()]);
    assert_eq!(doc.all.vars.ansible_host, "198.51.100.7");
    assert_eq!(runner.calls(), 0);
}

#[tokio::test]
async fn test_first_and_second_run_render_identically() {
    let cache = MemoryCache::empty();
    let runner = FakeRunner::succeeding(VALID_OUTPUT);
    let config = InventoryConfig::default();

    let first = json::render(&generate(&config, &cache, &runner).await.unwrap()).unwrap();
    let second = json::render(&generate(&config, &cache, &runner).await.unwrap()).unwrap();

    assert_eq!(first, second);
    assert_eq!(runner.calls(), 1);
}

#[tokio::test]
async fn test_missing_user_is_field_missing() {
    let cache = MemoryCache::holding(
        r#"{"web_public_ip": {"value": "203.0.113.10"}, "web_name": {"value": "nginx-web-01"}}"#,
    );

    let err = generate(&InventoryConfig::default(), &cache, &FakeRunner::failing(1))
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<InventoryError>(),
        Some(&InventoryError::FieldMissing {
            key: "web_user".to_string()
        })
    );
}

#[tokio::test]
async fn test_non_string_values_still_produce_document() {
    let cache = MemoryCache::holding(
        r#"{"web_public_ip": {"value": null}, "web_user": {"value": "ubuntu"}, "web_name": {"value": 7}}"#,
    );

    let doc = generate(&InventoryConfig::default(), &cache, &FakeRunner::failing(1))
        .await
        .expect("generate");

    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        serde_json::json!({
            "all": {
                "hosts": ["7"],
                "vars": {
                    "ansible_host": null,
                    "ansible_user": "ubuntu",
                    "ansible_python_interpreter": "/usr/bin/python3"
                }
            },
            "_meta": {"hostvars": {"7": {}}}
        })
    );
}

#[tokio::test]
async fn test_missing_value_field_is_fatal() {
    let cache = MemoryCache::holding(
        r#"{"web_public_ip": {"value": "203.0.113.10"}, "web_user": {"value": "ubuntu"}, "web_name": {"sensitive": false}}"#,
    );

    let err = generate(&InventoryConfig::default(), &cache, &FakeRunner::failing(1))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "provisioning output 'web_name' has no 'value' field"
    );
}
