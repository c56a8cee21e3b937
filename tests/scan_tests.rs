//! Integration tests for scan command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{dentry_cmd, write_note, SAMPLE_NOTE};

#[test]
fn test_scan_lists_tag_notes() {
    let temp = TempDir::new().unwrap();
    write_note(temp.path(), "journal.txt", SAMPLE_NOTE);
    write_note(temp.path(), "nested/deep/more.txt", "!Tagnotes\n(#)x#)\ny\n");
    write_note(temp.path(), "plain.txt", "hello\n");
    write_note(temp.path(), ".hidden/secret.txt", SAMPLE_NOTE);

    let output = dentry_cmd()
        .current_dir(temp.path())
        .arg("scan")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().map(str::trim).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("2  journal.txt"));
    assert!(lines[1].starts_with("1  nested"));
    assert!(lines[1].ends_with("more.txt"));
}

#[test]
fn test_scan_explicit_directory() {
    let temp = TempDir::new().unwrap();
    write_note(temp.path(), "notes/a.txt", SAMPLE_NOTE);

    dentry_cmd()
        .arg("scan")
        .arg(temp.path().join("notes"))
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"));
}

#[test]
fn test_scan_no_tag_notes() {
    let temp = TempDir::new().unwrap();
    write_note(temp.path(), "plain.txt", "hello\n");
    write_note(temp.path(), "empty.txt", "");

    dentry_cmd()
        .current_dir(temp.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tag notes found"));
}

#[test]
fn test_scan_missing_directory() {
    let temp = TempDir::new().unwrap();

    dentry_cmd()
        .arg("scan")
        .arg(temp.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}
