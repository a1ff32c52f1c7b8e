//! Offline command-line tests: help, argument validation, config handling.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Host nothing listens on; commands that reach the network would fail
const DEAD_HOST: &str = "http://127.0.0.1:9";

fn netlist(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("netlist").unwrap();
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("NETLIST_HOST")
        .env_remove("NETLIST_ACCOUNT_SWITCH_KEY")
        .env_remove("NETLIST_AUTHORIZATION")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    netlist(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("activate"))
        .stdout(predicate::str::contains("notification"));
}

#[test]
fn test_missing_host_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    netlist(&dir)
        .args(["get", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API host required"));
}

#[test]
fn test_blank_search_pattern_is_rejected_locally() {
    let dir = TempDir::new().unwrap();
    netlist(&dir)
        .args(["--host", DEAD_HOST, "search", "--pattern", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("search pattern is required"));
}

#[test]
fn test_sync_into_itself_is_rejected_locally() {
    let dir = TempDir::new().unwrap();
    netlist(&dir)
        .args(["--host", DEAD_HOST, "sync", "--id-src", "1_A", "--id-dst", "1_A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("same list"));
}

#[test]
fn test_subscribe_without_recipients_is_rejected() {
    let dir = TempDir::new().unwrap();
    netlist(&dir)
        .args(["--host", DEAD_HOST, "notification", "--list-ids", "1_A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one recipient"));
}

#[test]
fn test_unsubscribe_without_recipients_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    netlist(&dir)
        .args([
            "--host",
            DEAD_HOST,
            "notification",
            "--list-ids",
            "1_A",
            "--unsubscribe",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to unsubscribe"));
}

#[test]
fn test_invalid_list_type_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    netlist(&dir)
        .args(["create", "--name", "x", "--type", "ASN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown list type"));
}

#[test]
fn test_config_set_then_show_in_section() {
    let dir = TempDir::new().unwrap();

    netlist(&dir)
        .args(["--section", "customer-b", "config", "set", "host", DEAD_HOST])
        .assert()
        .success();
    netlist(&dir)
        .args(["--section", "customer-b", "config", "set", "authorization", "EG1-HMAC-SHA256 secret"])
        .assert()
        .success();

    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("[customer-b]"));

    netlist(&dir)
        .args(["--output", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(DEAD_HOST))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    netlist(&dir)
        .args(["config", "set", "api_key", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_path_echoes_explicit_file() {
    let dir = TempDir::new().unwrap();
    netlist(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
