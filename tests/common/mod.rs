#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn dentry_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dentry").unwrap();
    cmd.env_remove("DENTRY_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub const SAMPLE_NOTE: &str = "!Tagnotes\nintro\n(#)a, b #)\nHello\n(#)c#)\nWorld";

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_note(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
