//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibcompare() -> Command {
    let mut cmd = Command::cargo_bin("fibcompare").expect("binary not found");
    cmd.env_remove("FIBCOMPARE_N");
    cmd
}

#[test]
fn help_flag() {
    fibcompare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibcompare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibcompare"));
}

#[test]
fn compute_f10_all_strategies() {
    fibcompare()
        .args(["-n", "10", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("55"));
}

#[test]
fn compute_f0() {
    fibcompare()
        .args(["-n", "0", "--strategy", "iterative", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0"));
}

#[test]
fn compute_f1() {
    fibcompare()
        .args(["-n", "1", "--strategy", "iterative", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1"));
}

#[test]
fn compute_f100_bottom_up() {
    fibcompare()
        .args(["-n", "100", "--strategy", "bottom-up", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("354224848179261915075"));
}

#[test]
fn compute_f100_closed_form() {
    fibcompare()
        .args(["-n", "100", "--strategy", "closed-form", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("354224848179261915075"));
}

#[test]
fn menu_prompts_when_index_omitted() {
    fibcompare()
        .args(["--strategy", "iterative", "-q"])
        .write_stdin("10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available strategies"))
        .stdout(predicate::str::contains("55"));
}

#[test]
fn menu_rejects_invalid_input() {
    fibcompare()
        .args(["--strategy", "iterative"])
        .write_stdin("not-a-number\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn invalid_strategy() {
    fibcompare()
        .args(["-n", "10", "--strategy", "quantum"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn negative_index_rejected() {
    fibcompare().args(["-n", "-5"]).assert().failure();
}

#[test]
fn json_report() {
    fibcompare()
        .args(["-n", "10", "--strategy", "iterative", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"n\": 10"))
        .stdout(predicate::str::contains("\"strategy\": \"Iterative\""))
        .stdout(predicate::str::contains("\"value\": \"55\""));
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("f50.txt");
    fibcompare()
        .args(["-n", "50", "--strategy", "bottom-up", "-q"])
        .args(["-o", path.to_str().unwrap()])
        .assert()
        .success();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "12586269025");
}

#[test]
fn verbose_mode() {
    fibcompare()
        .args(["-n", "600", "--strategy", "iterative", "-v"])
        .assert()
        .success();
}

#[test]
fn details_mode() {
    fibcompare()
        .args(["-n", "100", "--strategy", "iterative", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result digits: 21"));
}

#[test]
fn all_above_ceilings_still_runs_iterative() {
    fibcompare()
        .args(["-n", "600", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1104330705729522423464")); // F(600) prefix
}

#[test]
fn completion_generation() {
    fibcompare()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibcompare"));
}
