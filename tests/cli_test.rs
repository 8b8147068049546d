//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn copgen() -> Command {
    Command::new(cargo_bin("copgen"))
}

#[test]
fn cli_shows_help() {
    copgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("RuboCop configuration generator"));
}

#[test]
fn cli_shows_version() {
    copgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_generates_root_config_and_fragments() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".ruby-version"), "3.3.6\n").unwrap();

    copgen()
        .args(["--project"])
        .arg(temp.path())
        .args(["init", "--skip-todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated .rubocop.yml"));

    let root = fs::read_to_string(temp.path().join(".rubocop.yml")).unwrap();
    assert!(root.contains("TargetRubyVersion: 3.3.6"));
    assert!(root.contains(".rubocop/cops/style.yml"));
    assert!(root.contains(".rubocop/cops/lint.yml"));

    let defaults = fs::read_to_string(temp.path().join(".rubocop/defaults/style.yml")).unwrap();
    assert!(defaults.starts_with("# Department 'Style'"));
}

#[test]
fn init_refuses_existing_files_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".rubocop.yml"), "keep me\n").unwrap();

    copgen()
        .args(["--project"])
        .arg(temp.path())
        .args(["init", "--skip-todo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use --force to overwrite"));

    assert_eq!(
        fs::read_to_string(temp.path().join(".rubocop.yml")).unwrap(),
        "keep me\n"
    );
}

#[test]
fn init_force_overwrites_existing_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".ruby-version"), "3.2.2\n").unwrap();
    fs::write(temp.path().join(".rubocop.yml"), "stale\n").unwrap();

    copgen()
        .args(["--project"])
        .arg(temp.path())
        .args(["init", "--force", "--skip-todo"])
        .assert()
        .success();

    let root = fs::read_to_string(temp.path().join(".rubocop.yml")).unwrap();
    assert!(!root.contains("stale"));
    assert!(root.contains("TargetRubyVersion: 3.2.2"));
}

#[test]
fn regenerate_todo_requires_root_config() {
    let temp = TempDir::new().unwrap();

    copgen()
        .args(["--project"])
        .arg(temp.path())
        .arg("regenerate-todo")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            ".rubocop.yml not found. Run 'copgen init' first.",
        ));
}

#[test]
fn completions_emit_a_script() {
    copgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("copgen"));
}
