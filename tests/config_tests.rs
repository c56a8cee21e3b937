//! Integration tests for config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{dentry_cmd, write_note};

#[test]
fn test_config_list_defaults() {
    dentry_cmd()
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_file_size = 16777216"))
        .stdout(predicate::str::contains("max_chunk_size = unlimited"))
        .stdout(predicate::str::contains("case_insensitive_tags = false"));
}

#[test]
fn test_config_set_and_get() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dentry.toml");

    dentry_cmd()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .arg("max_chunk_size")
        .arg("1024")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set max_chunk_size = 1024"));

    assert!(fs::read_to_string(&path)
        .unwrap()
        .contains("max_chunk_size = 1024"));

    dentry_cmd()
        .env("DENTRY_CONFIG", &path)
        .arg("config")
        .arg("max_chunk_size")
        .assert()
        .success()
        .stdout("1024\n");
}

#[test]
fn test_config_set_without_file_fails() {
    dentry_cmd()
        .arg("config")
        .arg("max_chunk_size")
        .arg("1024")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DENTRY_CONFIG"));
}

#[test]
fn test_config_unknown_key() {
    dentry_cmd()
        .arg("config")
        .arg("editor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_missing_config_file() {
    let temp = TempDir::new().unwrap();
    let note = write_note(temp.path(), "note.txt", "!Tagnotes\n");

    dentry_cmd()
        .env("DENTRY_CONFIG", temp.path().join("missing.toml"))
        .arg("check")
        .arg(&note)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_config_file() {
    let temp = TempDir::new().unwrap();
    let note = write_note(temp.path(), "note.txt", "!Tagnotes\n");
    let config = write_note(temp.path(), "dentry.toml", "max_file_size = \"lots\"\n");

    dentry_cmd()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&note)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
