use serde_json::json;

use ctas_analytics::DEFAULT_LIST_LIMIT;
use ctas_cli::config::{CURRENT_VERSION, CtasConfig, load_config, migrate, save_config};

#[test]
fn v0_config_gains_list_limit() {
    let v0 = json!({
        "data_dir": "/var/lib/ctas",
        "decisions_file": "records.json",
        "feedback_file": "feedback.json",
        "created_at": "2024-03-02T10:00:00Z",
    });

    let migrated = migrate(v0, 0).unwrap();
    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["list_limit"], DEFAULT_LIST_LIMIT);

    let config: CtasConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.list_limit, 120);
}

#[test]
fn migration_keeps_an_existing_limit() {
    let migrated = migrate(json!({ "list_limit": 25 }), 0).unwrap();
    assert_eq!(migrated["list_limit"], 25);
}

#[test]
fn newer_config_is_rejected() {
    let err = migrate(json!({}), CURRENT_VERSION + 1).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(json!([1, 2, 3]), 0).is_err());
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ctas").join("config.json");

    let mut config = CtasConfig::in_dir(dir.path().join("data"));
    config.config_version = 0;
    config.list_limit = 40;
    save_config(&path, &config).unwrap();

    assert!(!path.with_extension("json.tmp").exists());

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.list_limit, 40);
    assert_eq!(loaded.decisions_path(), dir.path().join("data").join("records.json"));
    assert_eq!(loaded.feedback_path(), dir.path().join("data").join("feedback.json"));
}

#[test]
fn pre_versioned_file_is_migrated_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"data_dir": "/tmp/ctas", "decisions_file": "records.json", "feedback_file": "feedback.json", "created_at": "2024-03-02T10:00:00Z"}"#,
    )
    .unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.list_limit, DEFAULT_LIST_LIMIT);
    assert_eq!(loaded.config_version, 1);
}
