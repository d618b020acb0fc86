//! Integration tests for argument handling and exit codes

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::keywords_cmd;

#[test]
fn test_no_arguments_fails() {
    keywords_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("MODE"));
}

#[test]
fn test_missing_path_fails() {
    keywords_cmd()
        .arg("clean")
        .write_stdin("$Id$\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("PATH"));
}

#[test]
fn test_blank_path_fails() {
    keywords_cmd()
        .arg("clean")
        .arg("   ")
        .write_stdin("$Id$\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing <path> argument"));
}

#[test]
fn test_unknown_mode_fails() {
    keywords_cmd()
        .arg("blur")
        .arg("a.rs")
        .write_stdin("$Id$\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("smudge or clean"));
}

#[test]
fn test_unknown_policy_fails() {
    keywords_cmd()
        .arg("--on-tool-error")
        .arg("retry")
        .arg("clean")
        .arg("a.rs")
        .write_stdin("$Id$\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("fatal, degrade"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();

    keywords_cmd()
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .arg("clean")
        .arg("a.rs")
        .write_stdin("$Id$\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("keywords.toml");
    std::fs::write(&config, "unknown_key = true\n").unwrap();

    keywords_cmd()
        .env("GIT_KEYWORDS_CONFIG", &config)
        .arg("clean")
        .arg("a.rs")
        .write_stdin("$Id$\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML deserialization error"));
}

#[test]
fn test_help_succeeds() {
    keywords_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("smudge"));
}
