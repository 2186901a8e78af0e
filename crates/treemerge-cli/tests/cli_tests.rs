//! Integration tests for the `treemerge` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the merge and
//! check subcommands through the actual binary, including stdin piping,
//! file output, output formats and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;

/// Helper: absolute path of a fixture file.
fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn treemerge() -> Command {
    Command::cargo_bin("treemerge").unwrap()
}

/// Helper: run `merge -f json` and parse stdout.
fn merge_json(args: &[&str], stdin: Option<&str>) -> serde_json::Value {
    let mut cmd = treemerge();
    cmd.args(["merge", "-f", "json"]).args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    let output = cmd.output().expect("treemerge should run");
    assert!(
        output.status.success(),
        "merge failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout must be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// Merge subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn merge_two_files_as_json() {
    let merged = merge_json(&[&fixture("base.yaml"), &fixture("override.json")], None);
    assert_eq!(
        merged,
        json!({
            "name": "inventory",
            "replicas": 5,
            "ratio": 0.75,
            "tags": ["web", "public", "internal"],
            "database": {"host": "db.example.com", "port": 5432, "pool": {"size": 20}}
        })
    );
}

#[test]
fn number_wins_regardless_of_file_order() {
    let merged = merge_json(&[&fixture("override.json"), &fixture("base.yaml")], None);
    assert_eq!(merged["ratio"], json!(0.75));
    assert_eq!(merged["replicas"], json!(2));
}

#[test]
fn merge_defaults_to_yaml() {
    treemerge()
        .args(["merge", &fixture("base.yaml"), &fixture("override.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("replicas: 5"))
        .stdout(predicate::str::contains("host: db.example.com"));
}

#[test]
fn merge_reads_stdin_dash() {
    let merged = merge_json(&[&fixture("base.yaml"), "-"], Some(r#"{"name": "from-stdin"}"#));
    assert_eq!(merged["name"], json!("from-stdin"));
    assert_eq!(merged["database"]["port"], json!(5432));
}

#[test]
fn merge_single_stdin_document() {
    let merged = merge_json(&["-"], Some("[1, 2]"));
    assert_eq!(merged, json!([1, 2]));
}

#[test]
fn merge_multi_document_file() {
    let merged = merge_json(&[&fixture("multi.yaml")], None);
    assert_eq!(merged, json!({"features": ["b", "a"], "debug": true}));
}

#[test]
fn merge_writes_output_file() {
    let output_path = std::env::temp_dir().join(format!(
        "treemerge-test-output-{}.yaml",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&output_path);

    treemerge()
        .args(["merge", &fixture("base.yaml"), &fixture("override.json"), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.contains("pool:"), "merged YAML should contain 'pool:'");

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn merge_conflict_fails_with_path() {
    treemerge()
        .args(["merge", &fixture("base.yaml"), &fixture("conflict.json")])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to merge documents"))
        .stderr(predicate::str::contains("$.database"));
}

#[test]
fn merge_scalar_with_object_fails() {
    treemerge()
        .args(["merge", "-"])
        .arg(fixture("base.yaml"))
        .write_stdin("42")
        .assert()
        .failure()
        .stderr(predicate::str::contains("integer").and(predicate::str::contains("object")));
}

#[test]
fn merge_rejects_non_string_keys() {
    treemerge()
        .args(["merge", &fixture("int_key.yaml")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a string"));
}

#[test]
fn merge_rejects_invalid_yaml() {
    treemerge()
        .args(["merge", "-"])
        .write_stdin("key: [unterminated")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode documents from <stdin>"));
}

#[test]
fn merge_missing_file_fails() {
    treemerge()
        .args(["merge", "/nonexistent/treemerge-input.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn merge_rejects_stdin_twice() {
    treemerge()
        .args(["merge", "-", "-"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("only once"));
}

#[test]
fn merge_requires_a_file() {
    treemerge().arg("merge").assert().failure().code(2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_reports_document_count_and_kind() {
    treemerge()
        .args(["check", &fixture("base.yaml"), &fixture("multi.yaml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Documents:  3"))
        .stdout(predicate::str::contains("Root kind:  object"))
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn check_fails_on_conflict() {
    treemerge()
        .args(["check", &fixture("override.json"), &fixture("conflict.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot merge"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn verbose_logs_go_to_stderr() {
    treemerge()
        .env_remove("RUST_LOG")
        .args(["-v", "merge", "-f", "json", &fixture("base.yaml"), &fixture("override.json")])
        .assert()
        .success()
        .stderr(predicate::str::contains("merging document #2"))
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn help_lists_subcommands() {
    treemerge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("check"));
}
