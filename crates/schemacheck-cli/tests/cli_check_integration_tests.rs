//! CLI integration tests
//!
//! These tests run the built `schemacheck` binary against snapshots written
//! to a scratch directory.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use schemacheck_core::model::{AttributeKind, AttributeNode, AttributeTree, Snapshot};
use schemacheck_store::{load_snapshot, save_snapshot};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn widget(provider: &str, zone: AttributeNode) -> Snapshot {
    Snapshot::new(provider).with_resource(
        "acme_widget",
        AttributeTree::new()
            .with_attribute("name", AttributeNode::new(AttributeKind::String).required())
            .with_attribute("zone", zone),
    )
}

fn write(dir: &TempDir, name: &str, snapshot: &Snapshot) -> PathBuf {
    let path = dir.path().join(name);
    save_snapshot(&path, snapshot).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_schemacheck"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn s(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_check_compatible_exits_zero() {
    let dir = TempDir::new().unwrap();
    let zone = AttributeNode::new(AttributeKind::String).optional();
    let baseline = write(&dir, "baseline.json", &widget("acme", zone.clone()));
    let current = write(&dir, "current.json", &widget("acme", zone));

    let output = run(&["check", "--baseline", s(&baseline), "--current", s(&current)]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("**Result**: Compatible"));
}

#[test]
fn test_check_violation_exits_three_with_json_report() {
    // Scenario: Optional -> Required on acme_widget.zone
    let dir = TempDir::new().unwrap();
    let baseline = write(
        &dir,
        "baseline.json",
        &widget("acme", AttributeNode::new(AttributeKind::String).optional()),
    );
    let current = write(
        &dir,
        "current.json",
        &widget("acme", AttributeNode::new(AttributeKind::String).required()),
    );

    let output = run(&[
        "check",
        "--baseline",
        s(&baseline),
        "--current",
        s(&current),
        "--output",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(3));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let violations = report["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["rule"], "OptionalToRequired");
    assert_eq!(violations[0]["path"]["resource"], "acme_widget");
    assert_eq!(violations[0]["path"]["segments"][0], "zone");
}

#[test]
fn test_check_provider_mismatch_exits_one() {
    let dir = TempDir::new().unwrap();
    let zone = AttributeNode::new(AttributeKind::String).optional();
    let baseline = write(&dir, "baseline.json", &widget("acme", zone.clone()));
    let current = write(&dir, "current.json", &widget("acme-fork", zone));

    let output = run(&["check", "--baseline", s(&baseline), "--current", s(&current)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_PROVIDER_MISMATCH"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_check_config_disables_rule() {
    let dir = TempDir::new().unwrap();
    let baseline = write(
        &dir,
        "baseline.json",
        &widget("acme", AttributeNode::new(AttributeKind::String).optional().with_default("a")),
    );
    let current = write(
        &dir,
        "current.json",
        &widget("acme", AttributeNode::new(AttributeKind::String).optional().with_default("b")),
    );
    let config = dir.path().join("schemacheck.toml");
    std::fs::write(&config, "[rules]\ndisabled = [\"DefaultValueChange\"]\n").unwrap();

    let without_config = run(&["check", "--baseline", s(&baseline), "--current", s(&current)]);
    assert_eq!(without_config.status.code(), Some(3));

    let with_config = run(&[
        "check",
        "--baseline",
        s(&baseline),
        "--current",
        s(&current),
        "--config",
        s(&config),
    ]);
    assert_eq!(with_config.status.code(), Some(0));
}

#[test]
fn test_check_extended_flag_enables_opt_in_rules() {
    let dir = TempDir::new().unwrap();
    let baseline = write(
        &dir,
        "baseline.json",
        &widget("acme", AttributeNode::new(AttributeKind::String).optional()),
    );
    let current = write(
        &dir,
        "current.json",
        &widget("acme", AttributeNode::new(AttributeKind::String).optional().force_new()),
    );

    let baseline_rules = run(&["check", "--baseline", s(&baseline), "--current", s(&current)]);
    assert_eq!(baseline_rules.status.code(), Some(0));

    let extended = run(&[
        "check",
        "--baseline",
        s(&baseline),
        "--current",
        s(&current),
        "--extended",
    ]);
    assert_eq!(extended.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&extended.stdout).contains("ForceNewAdded"));
}

#[test]
fn test_convert_then_inspect() {
    let dir = TempDir::new().unwrap();
    let dump = dir.path().join("dump.json");
    std::fs::write(
        &dump,
        r#"{
            "resources_map": {
                "acme_widget": {
                    "schema": {
                        "name": {"type": "TypeString", "required": true},
                        "rule": {"type": "TypeList", "optional": true,
                                 "elem": {"schema": {"port": {"type": "TypeInt", "optional": true}}}}
                    }
                }
            }
        }"#,
    )
    .unwrap();
    let native = dir.path().join("out").join("acme.json");

    let convert = run(&[
        "convert",
        "--provider-name",
        "acme",
        "--input",
        s(&dump),
        "--output",
        s(&native),
    ]);
    assert!(
        convert.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&convert.stderr)
    );
    assert_eq!(load_snapshot(&native).unwrap().resources.len(), 1);

    let inspect = run(&["inspect", s(&native)]);
    assert!(inspect.status.success());
    let stdout = String::from_utf8_lossy(&inspect.stdout);
    assert!(stdout.contains("provider: acme"));
    assert!(stdout.contains("acme_widget  3 attributes"));
}

#[test]
fn test_provider_dump_input_requires_provider_name() {
    let dir = TempDir::new().unwrap();
    let dump = dir.path().join("dump.json");
    std::fs::write(&dump, "{}").unwrap();

    let output = run(&[
        "check",
        "--baseline",
        s(&dump),
        "--current",
        s(&dump),
        "--input-format",
        "provider-dump",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--provider-name"));
}
