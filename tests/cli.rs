//! Command-line behavior of the `smoothsort` binary

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_smoothsort"))
}

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(binary())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn smoothsort binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for smoothsort binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn sorts_text_lines() {
    let output = run(&["sort"], "pear\napple\nfig\n");
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "apple\nfig\npear\n");
}

#[test]
fn integers_skip_blank_lines() {
    let output = run(&["sort", "--kind", "integer"], "3\n\n-1\n  \n2\n");
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "-1\n2\n3\n");
}

#[test]
fn descending_integers() {
    let output = run(&["sort", "--kind", "integer", "--descending"], "10\n-4\n7\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "10\n7\n-4\n");
}

#[test]
fn invalid_integer_reports_line() {
    let output = run(&["sort", "--kind", "integer"], "1\n\nx7\n");
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("invalid integer 'x7' on line 3"));
}

#[test]
fn nan_fails_with_incomparable() {
    let output = run(&["sort", "--kind", "float"], "1.5\nNaN\n0.5\n");
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("cannot sort input containing NaN"), "stderr: {}", stderr);
    assert!(stderr.contains("no defined order"), "stderr: {}", stderr);
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn floats_sort_without_nan() {
    let output = run(&["sort", "--kind", "float"], "2.5\n-1\n0.25\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-1\n0.25\n2.5\n");
}

#[test]
fn stats_are_logged_to_stderr() {
    let output = run(&["sort", "--kind", "integer", "--stats"], "5\n4\n3\n2\n1\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1\n2\n3\n4\n5\n");
    assert!(stderr_of(&output).contains("sort statistics"));
}

#[test]
fn leonardo_prints_requested_terms() {
    let output = run(&["leonardo", "--count", "6"], "");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "L(0)\t1\nL(1)\t1\nL(2)\t3\nL(3)\t5\nL(4)\t9\nL(5)\t15\n"
    );
}

#[test]
fn leonardo_caps_at_largest_order() {
    let output = run(&["leonardo", "--count", "1000"], "");
    assert!(output.status.success());
    let lines = stdout_of(&output).lines().count();
    assert_eq!(lines, smoothsort::leonardo::MAX_ORDER + 1);
}
