//! Shared E2E test helpers for `vaultward` binary tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Build a Command for the `vaultward` binary.
pub fn vaultward_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("vaultward").expect("vaultward binary builds")
}

/// Write a rule-set JSON file into `dir` and return its path.
pub fn write_rules(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, json).expect("write rule set fixture");
    path
}
