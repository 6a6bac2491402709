//! Backend wired by `GuiDeps::from_config` against a fake `ddev` script.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::LazyLock;

use ddevdesk_gui::{GuiBackend, GuiDeps, ToolConfig};
use serde_json::json;
use tempfile::TempDir;

const FAKE_DDEV: &str = r#"#!/bin/sh
case "$1" in
  start)
    echo "Starting $2..."
    echo "Successfully started $2"
    ;;
  *)
    exit 1
    ;;
esac
"#;

static FAKE_DDEV_DIR: LazyLock<TempDir> = LazyLock::new(|| {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ddev");
    fs::write(&path, FAKE_DDEV).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    dir
});

fn fake_ddev_path() -> PathBuf {
    FAKE_DDEV_DIR.path().join("ddev")
}

fn backend() -> GuiBackend {
    let config = ToolConfig::default().with_binary(fake_ddev_path().to_str().unwrap());
    GuiBackend::new(GuiDeps::from_config(&config).unwrap())
}

#[tokio::test]
async fn test_start_output_is_readable_through_log_channel() {
    let backend = backend();

    let started = backend.call("ddev:start", Some("p1")).await;
    assert_eq!(serde_json::to_value(&started).unwrap(), json!({"success": true}));

    let output = backend.call("terminal:getOutput", Some("p1")).await;
    assert!(output.success);
    let messages: Vec<_> = output
        .data
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["message"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(messages, vec!["Starting p1...", "Successfully started p1"]);
}

#[tokio::test]
async fn test_failed_read_leaves_logs_empty() {
    let backend = backend();

    let listed = backend.call("ddev:list", None).await;
    assert!(!listed.success);
    assert!(listed.error.unwrap().starts_with("Command failed: "));

    let output = backend.call("terminal:getOutput", None).await;
    assert_eq!(output.data, Some(json!([])));
}
