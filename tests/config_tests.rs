//! Integration tests for init and config commands

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::doctag_cmd;

#[test]
fn test_init_creates_configuration() {
    let temp = TempDir::new().unwrap();

    doctag_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized doctag configuration"));

    assert!(temp.path().join(".doctag/config.toml").exists());
}

#[test]
fn test_init_records_search_paths() {
    let temp = TempDir::new().unwrap();

    doctag_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--search-path")
        .arg("/usr/share/vim/runtime")
        .assert()
        .success();

    doctag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("/usr/share/vim/runtime"));
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();

    doctag_cmd().arg("init").arg(temp.path()).assert().success();
    doctag_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_list_shows_defaults() {
    let temp = TempDir::new().unwrap();
    doctag_cmd().arg("init").arg(temp.path()).assert().success();

    doctag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("help_lang = en"))
        .stdout(predicate::str::contains("style = minimal"))
        .stdout(predicate::str::contains("readme = include"))
        .stdout(predicate::str::contains("resolver = memory"));
}

#[test]
fn test_config_set_and_get() {
    let temp = TempDir::new().unwrap();
    doctag_cmd().arg("init").arg(temp.path()).assert().success();

    doctag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("help_lang")
        .arg("ja,en")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set help_lang = ja,en"));

    doctag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("help_lang")
        .assert()
        .success()
        .stdout(predicate::str::contains("ja,en"));
}

#[test]
fn test_config_invalid_key_fails() {
    let temp = TempDir::new().unwrap();
    doctag_cmd().arg("init").arg(temp.path()).assert().success();

    doctag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_outside_repository_fails() {
    let temp = TempDir::new().unwrap();

    doctag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a doctag directory"));
}

#[test]
fn test_configured_paths_drive_listing() {
    let config_dir = TempDir::new().unwrap();
    let docs = TempDir::new().unwrap();
    common::write_help_tree(docs.path());

    doctag_cmd()
        .arg("init")
        .arg(config_dir.path())
        .arg("--search-path")
        .arg(docs.path())
        .assert()
        .success();

    doctag_cmd()
        .current_dir(config_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("motion"))
        .stdout(predicate::str::contains("count"));
}
