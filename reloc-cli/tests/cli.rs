//! Tests for top-level CLI behavior: help, version and argument errors.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("go"))
        .stdout(predicate::str::contains("define"))
        .stdout(predicate::str::contains("find"));
}

#[test]
fn test_question_mark_is_help() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("-?")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_every_command_accepts_help_forms() {
    let env = TestEnv::new();
    for command in [
        "query", "go", "define", "list", "find", "remove", "state", "init",
    ] {
        for flag in ["-?", "-h", "--help"] {
            env.command_bare()
                .arg(command)
                .arg(flag)
                .assert()
                .success()
                .stdout(predicate::str::contains("Usage"));
        }
    }
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_is_misuse() {
    let env = TestEnv::new();
    env.command_bare().assert().code(2);
}

#[test]
fn test_unknown_subcommand_is_misuse() {
    let env = TestEnv::new();
    env.command_bare().arg("teleport").assert().code(2);
}

#[test]
fn test_define_requires_two_arguments() {
    let env = TestEnv::new();
    env.command()
        .args(["define", "onlyname"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("PATH"));
}

#[test]
fn test_unknown_emit_shell_is_misuse() {
    let env = TestEnv::new();
    env.command()
        .args(["query", "--emit", "tcsh", "."])
        .assert()
        .code(2);
}
