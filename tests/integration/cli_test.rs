//! CLI surface tests for the qterm binary
//!
//! Everything here goes through `qterm exec`/`commands`, which never touch
//! the real terminal, so the suite is safe in headless CI.

use assert_cmd::Command;
use predicates::prelude::*;

fn qterm() -> Command {
    Command::cargo_bin("qterm").unwrap()
}

#[test]
fn exec_prints_banner_and_command_output() {
    qterm()
        .args(["exec", "pwd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CYBER2070 TERMINAL"))
        .stdout(predicate::str::contains("cyber_user@quantum:/ $ pwd"));
}

#[test]
fn exec_walks_the_virtual_tree() {
    qterm()
        .args(["exec", "cd projects", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hologram-commerce"))
        .stdout(predicate::str::contains("quantum-web"));
}

#[test]
fn exec_reports_unknown_commands() {
    qterm()
        .args(["exec", "frobnicate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Command not found: frobnicate"))
        .stdout(predicate::str::contains("Type \"help\" for available commands"));
}

#[test]
fn exec_stops_at_exit() {
    qterm()
        .args(["exec", "exit", "pwd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pwd").not());
}

#[test]
fn exec_json_emits_one_object_per_entry() {
    let output = qterm()
        .args(["exec", "--json", "whoami"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let entries: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    // Banner entry plus the whoami entry.
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["command"], "whoami");
    assert_eq!(entries[1]["output"][0], "cyber_user@quantum-terminal");
}

#[test]
fn commands_lists_the_grammar() {
    qterm()
        .arg("commands")
        .assert()
        .success()
        .stdout(predicate::str::contains("systeminfo"))
        .stdout(predicate::str::contains("cd <dir>"))
        .stdout(predicate::str::contains("netstat"));
}

#[test]
fn exec_requires_at_least_one_line() {
    qterm().arg("exec").assert().failure();
}

#[test]
fn version_flag_works() {
    qterm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("qterm"));
}

#[test]
fn completions_generate_for_bash() {
    qterm()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qterm"));
}
