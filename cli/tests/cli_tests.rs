//! CLI binary integration tests using assert_cmd + predicates.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("schema-href").expect("binary should exist")
}

const BASE: &str = "http://a.com/x/y/";

// ── Resolve ─────────────────────────────────────────────────────────────────

#[test]
fn test_resolve_prints_one_line_per_reference() {
    cmd()
        .args(["resolve", BASE, "../z", "/root", "#frag"])
        .assert()
        .success()
        .stdout("http://a.com/x/z\nhttp://a.com/root\nhttp://a.com/x/y/#frag\n");
}

#[test]
fn test_resolve_accepts_empty_reference() {
    cmd()
        .args(["resolve", BASE, ""])
        .assert()
        .success()
        .stdout(format!("{BASE}\n"));
}

#[test]
fn test_resolve_json_reports_kind() {
    let output = cmd()
        .args(["resolve", BASE, "//b.com/y", "?q=1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results[0]["kind"], "scheme-relative");
    assert_eq!(results[0]["resolved"], "http://b.com/y");
    assert_eq!(results[1]["kind"], "query");
    assert_eq!(results[1]["resolved"], "http://a.com/x/y/?q=1");
}

#[test]
fn test_resolve_rejects_invalid_base() {
    cmd()
        .args(["resolve", "ftp://a.com/x", "y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base location"))
        .stderr(predicate::str::contains("must be an absolute URL"));
}

// ── Scheme Check Flag ───────────────────────────────────────────────────────

#[test]
fn test_prefix_check_accepts_lookalike_scheme() {
    cmd()
        .args(["resolve", "httpx://a.com/x", "y"])
        .assert()
        .success()
        .stdout("httpx://a.com/y\n");
}

#[test]
fn test_strict_check_rejects_lookalike_scheme() {
    cmd()
        .args(["--scheme-check", "strict", "resolve", "httpx://a.com/x", "y"])
        .assert()
        .failure();

    cmd()
        .args(["--scheme-check", "strict", "resolve", "https://a.com/x", "y"])
        .assert()
        .success()
        .stdout("https://a.com/y\n");
}

#[test]
fn test_flags_after_references_are_parsed_as_flags() {
    let output = cmd()
        .args(["resolve", "http://a/b/c", "#f", "x", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results.as_array().map(Vec::len), Some(2));
    assert_eq!(results[0]["resolved"], "http://a/b/c#f");
    assert_eq!(results[1]["resolved"], "http://a/b/x");
}

#[test]
fn test_trailing_strict_flag_still_rejects_lookalike_scheme() {
    cmd()
        .args(["resolve", "httpx://a/b", "x", "--scheme-check", "strict"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid base location"));
}

#[test]
fn test_hyphen_reference_after_double_dash() {
    cmd()
        .args(["resolve", "http://a/b/c", "--", "-draft.xsd"])
        .assert()
        .success()
        .stdout("http://a/b/-draft.xsd\n");
}

// ── Canonicalize ────────────────────────────────────────────────────────────

#[test]
fn test_canonicalize() {
    cmd()
        .args(["canonicalize", "/a/./b/../c"])
        .assert()
        .success()
        .stdout("/a/c\n");
}

// ── Batch ───────────────────────────────────────────────────────────────────

#[test]
fn test_batch_to_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pairs.json");
    let output = dir.path().join("out.json");

    let pairs = serde_json::json!([
        { "base": "http://a/b/c", "reference": "d" },
        { "base": "mailto:x@y", "reference": "d" },
        { "base": "file:///x/y.xsd" }
    ]);
    fs::write(&input, pairs.to_string()).unwrap();

    cmd()
        .args(["batch", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 entries had an invalid base"));

    let content = fs::read_to_string(&output).expect("output file should exist");
    let results: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(results[0]["resolved"], "http://a/b/d");
    assert_eq!(results[0]["kind"], "path-relative");
    assert!(results[0].get("error").is_none());

    assert_eq!(results[1]["code"], "invalid_base_location");
    assert!(results[1].get("resolved").is_none());

    assert_eq!(results[2]["reference"], "");
    assert_eq!(results[2]["resolved"], "file:///x/y.xsd");
}

#[test]
fn test_batch_from_stdin_compact() {
    cmd()
        .args(["batch", "-", "--format", "compact"])
        .write_stdin(r##"[{"base":"http://a/b","reference":"#x"}]"##)
        .assert()
        .success()
        .stdout(predicate::str::contains(r##""resolved":"http://a/b#x""##));
}

// ── Invalid Input ───────────────────────────────────────────────────────────

#[test]
fn test_batch_missing_file() {
    cmd()
        .args(["batch", "/nonexistent/path/pairs.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_batch_malformed_json() {
    cmd()
        .args(["batch", "-"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse batch from stdin"));
}

// ── Help Output ─────────────────────────────────────────────────────────────

#[test]
fn test_help_output() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("canonicalize"))
        .stdout(predicate::str::contains("batch"));
}

#[test]
fn test_resolve_help() {
    cmd()
        .args(["resolve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--scheme-check"));
}
