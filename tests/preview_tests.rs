//! Integration tests for the preview command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{doctag_cmd, write_help_tree};

#[test]
fn test_preview_renders_window_around_match() {
    let temp = TempDir::new().unwrap();
    write_help_tree(temp.path());

    let output = doctag_cmd()
        .arg("preview")
        .arg("motion")
        .arg("--path")
        .arg(temp.path())
        .arg("--height")
        .arg("4")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    // Inclusive range [8, 12]: the match line plus the viewport height.
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("*motion* motions move the cursor"));
    assert!(lines[0].trim_start().starts_with('8'));
}

#[test]
fn test_preview_pattern_not_found_is_diagnostic() {
    let temp = TempDir::new().unwrap();
    let doc = write_help_tree(temp.path());
    // Tag entry whose pattern no longer occurs in the target.
    let mut tags = fs::read_to_string(doc.join("tags")).unwrap();
    tags.push_str("stale\tintro.txt\t/*gone-pattern*\n");
    fs::write(doc.join("tags"), tags).unwrap();

    doctag_cmd()
        .arg("preview")
        .arg("stale")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Pattern '*gone-pattern*' not found"))
        .stdout(predicate::str::contains("intro.txt"));
}

#[test]
fn test_preview_unknown_tag_fails() {
    let temp = TempDir::new().unwrap();
    write_help_tree(temp.path());

    doctag_cmd()
        .arg("preview")
        .arg("no-such-tag")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Tag not found"));
}

#[test]
fn test_preview_language_disambiguated_label() {
    let temp = TempDir::new().unwrap();
    write_help_tree(temp.path());

    doctag_cmd()
        .arg("preview")
        .arg("motion@ja")
        .arg("--path")
        .arg(temp.path())
        .arg("--style")
        .arg("all-lang")
        .arg("--lang")
        .arg("en,ja")
        .assert()
        .success()
        .stdout(predicate::str::contains("(japanese)"));
}

#[test]
fn test_preview_json_payload() {
    let temp = TempDir::new().unwrap();
    write_help_tree(temp.path());

    let output = doctag_cmd()
        .arg("preview")
        .arg("motion")
        .arg("--path")
        .arg(temp.path())
        .arg("--height")
        .arg("2")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON output");
    assert_eq!(payload["kind"], "content");
    assert_eq!(payload["start"], 8);
    assert_eq!(payload["content_type"], "help");
    assert_eq!(payload["lines"].as_array().unwrap().len(), 3);
}

#[test]
fn test_preview_json_diagnostic() {
    let temp = TempDir::new().unwrap();
    let doc = write_help_tree(temp.path());
    let mut tags = fs::read_to_string(doc.join("tags")).unwrap();
    tags.push_str("stale\tintro.txt\t/*gone-pattern*\n");
    fs::write(doc.join("tags"), tags).unwrap();

    let output = doctag_cmd()
        .arg("preview")
        .arg("stale")
        .arg("--path")
        .arg(temp.path())
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON output");
    assert_eq!(payload["kind"], "diagnostic");
    assert!(payload["message"]
        .as_str()
        .unwrap()
        .contains("*gone-pattern*"));
}

#[test]
#[cfg(unix)]
fn test_preview_with_grep_resolver() {
    let temp = TempDir::new().unwrap();
    write_help_tree(temp.path());

    // Configure the external resolver through the config file.
    doctag_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();
    doctag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("resolver")
        .arg("grep")
        .assert()
        .success();

    doctag_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("motion")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("*motion* motions move the cursor"));
}
