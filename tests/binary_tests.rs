//! Integration tests for the sql-review binary.

use std::io::Write;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    cargo_bin_cmd!("sql-review")
}

#[test]
fn test_analyze_clean_query_exits_zero() {
    let mut queries = NamedTempFile::new().unwrap();
    writeln!(queries, "SELECT id FROM users WHERE id = 1;").unwrap();

    cmd()
        .args(["analyze", queries.path().to_str().unwrap(), "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_analyze_warning_exits_one() {
    let mut queries = NamedTempFile::new().unwrap();
    writeln!(queries, "SELECT * FROM orders;").unwrap();

    cmd()
        .args(["analyze", queries.path().to_str().unwrap(), "--no-color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("SQL001"));
}

#[test]
fn test_analyze_error_exits_two() {
    let mut queries = NamedTempFile::new().unwrap();
    writeln!(queries, "DELETE FROM orders;").unwrap();

    cmd()
        .args(["analyze", queries.path().to_str().unwrap(), "--no-color"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("SQL020"));
}

#[test]
fn test_analyze_from_stdin() {
    cmd()
        .args(["analyze", "-", "--no-color"])
        .write_stdin("SELECT * FROM users")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("SELECT * should be avoided"));
}

#[test]
fn test_analyze_json_output() {
    cmd()
        .args(["analyze", "-", "-f", "json", "--no-color"])
        .write_stdin("SELECT * FROM users")
        .assert()
        .stdout(predicate::str::contains("\"ruleId\": \"SQL001\""));
}

#[test]
fn test_analyze_missing_file() {
    cmd()
        .args(["analyze", "does-not-exist.sql"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_analyze_blank_input_rejected() {
    cmd()
        .args(["analyze", "-"])
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_format_writes_formatted_sql() {
    cmd()
        .args(["format", "-"])
        .write_stdin("select id,name from users where id=1")
        .assert()
        .success()
        .stdout(predicate::str::contains("SELECT\n  id, name\nFROM users\nWHERE id=1;"));
}

#[test]
fn test_format_file_input() {
    let mut queries = NamedTempFile::new().unwrap();
    writeln!(queries, "select a from t").unwrap();

    cmd()
        .args(["format", queries.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("SELECT\n  a\nFROM t;"));
}

#[test]
fn test_verbose_analyze_lists_statements() {
    cmd()
        .args(["analyze", "-", "--no-color", "--verbose"])
        .write_stdin("SELECT * FROM a; DELETE FROM b")
        .assert()
        .stdout(predicate::str::contains("[0] SELECT * FROM a"))
        .stdout(predicate::str::contains("[1] DELETE FROM b"));
}
