//! End-to-end CLI integration tests.

use std::io::Write;
use std::process::Stdio;
use std::time::Duration;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use predicates::prelude::*;

fn strassen() -> Command {
    Command::cargo_bin("strassen").expect("binary not found")
}

#[test]
fn help_flag() {
    strassen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strassen"));
}

#[test]
fn version_flag() {
    strassen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("strassen"));
}

#[test]
fn two_by_two_from_stdin() {
    strassen()
        .write_stdin("2\n1 2\n3 4\n5 6\n7 8\n")
        .assert()
        .success()
        .stdout("19 22\n43 50\n");
}

#[test]
fn padded_identity() {
    strassen()
        .write_stdin("3\n1 0 0\n0 1 0\n0 0 1\n1 0 0\n0 1 0\n0 0 1\n")
        .assert()
        .success()
        .stdout("1 0 0\n0 1 0\n0 0 1\n");
}

#[test]
fn zero_matrix() {
    strassen()
        .write_stdin("2\n0 0 0 0\n5 6 7 8\n")
        .assert()
        .success()
        .stdout("0 0\n0 0\n");
}

#[test]
fn all_algorithms_agree() {
    strassen()
        .args(["--algo", "all", "--threshold", "1"])
        .write_stdin("5\n1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25\n\
                      1 0 0 0 0 0 1 0 0 0 0 0 1 0 0 0 0 0 1 0 0 0 0 0 1\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 2 3 4 5\n6 7 8 9 10\n"));
}

#[test]
fn json_output() {
    let output = strassen()
        .args(["--format", "json"])
        .write_stdin("1 6 7")
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["data"][0][0], 42);
}

#[test]
fn input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2\n1 1 1 1\n2 2 2 2").unwrap();
    strassen()
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout("4 4\n4 4\n");
}

#[test]
fn missing_input_file() {
    strassen()
        .args(["--input", "/nonexistent/strassen/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open input"));
}

#[test]
fn zero_size_is_config_error() {
    strassen()
        .write_stdin("0\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid matrix size"));
}

#[test]
fn truncated_input_is_config_error() {
    strassen()
        .write_stdin("2\n1 2 3 4\n5 6\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("matrix B"));
}

#[test]
fn unknown_algorithm() {
    strassen()
        .args(["--algo", "winograd"])
        .write_stdin("1 1 1")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn overflow_reported() {
    strassen()
        .write_stdin("1\n2147483647\n2\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overflow"));
}

#[test]
fn identity_keeps_large_entries() {
    strassen()
        .write_stdin("2\n1073741824 0\n0 2147483647\n1 0\n0 1\n")
        .assert()
        .success()
        .stdout("1073741824 0\n0 2147483647\n");
}

#[test]
fn timeout_starts_after_input() {
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("strassen"))
        .args(["--timeout", "200ms"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    std::thread::sleep(Duration::from_millis(600));
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"2\n1 2\n3 4\n5 6\n7 8\n")
        .unwrap();
    child
        .wait_with_output()
        .unwrap()
        .assert()
        .success()
        .stdout("19 22\n43 50\n");
}

#[test]
fn zero_timeout_exits_with_timeout_code() {
    strassen()
        .args(["--timeout", "0ms"])
        .write_stdin("1 6 7")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn details_on_stderr() {
    strassen()
        .arg("--details")
        .write_stdin("3\n1 2 3 4 5 6 7 8 9\n1 0 0 0 1 0 0 0 1\n")
        .assert()
        .success()
        .stdout("1 2 3\n4 5 6\n7 8 9\n")
        .stderr(predicate::str::contains("padded to 4x4"));
}

#[test]
fn completion_generation() {
    strassen()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strassen"));
}
