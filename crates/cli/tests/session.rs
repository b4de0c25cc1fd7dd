//! End-to-end runs of the `peripheral` binary with piped stdin.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

const DATA: &str = "Number,X,Y,Direction\n\
                    4,100,0,\n\
                    2,10,0,West\n\
                    1,0,0,East\n\
                    3,0,10,North\n";

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_peripheral"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn write_data(dir: &Path) -> String {
    let path = dir.join("points.csv");
    fs::write(&path, DATA).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn missing_or_extra_arguments_print_usage() {
    for args in [&[][..], &["a.csv", "b.csv"][..]] {
        let out = run(args, "");
        assert_eq!(out.status.code(), Some(1));
        assert_eq!(String::from_utf8_lossy(&out.stdout), "Usage: peripheral data.csv\n");
    }
}

#[test]
fn unreadable_input_exits_not_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    let out = run(&[missing.to_str().unwrap()], "");
    // 404 truncated to the 8-bit process status.
    assert_eq!(out.status.code(), Some(404 % 256));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Error: ") && stdout.contains("nope.csv file not found"));
}

#[test]
fn full_session_writes_plot_and_reports() {
    let dir = tempdir().unwrap();
    let input = write_data(dir.path());
    // Sorted order: 1 (0,0), 3 (0,10), 2 (10,0), 4 (100,0).
    let out = run(&[&input], "0 10 20\n1 10 200\n");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Error: Data Point number must be between 1 and 4\n"));
    assert!(stdout.ends_with("Visible Points:\nNumber 2\nNumber 4\n"), "{stdout}");

    let svg = dir.path().join("points.svg");
    assert!(svg.exists());
    assert!(dir.path().join("points.provenance.json").exists());
}

#[test]
fn no_plot_and_empty_result() {
    let dir = tempdir().unwrap();
    let input = write_data(dir.path());
    // Ordinal 3 is label 2 at (10, 0) facing West; nothing within 5.
    let out = run(&["--no-plot", "-q", &input], "3 45 5\n");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).ends_with("No visible points\n"));
    assert!(!dir.path().join("points.svg").exists());
}

#[test]
fn malformed_data_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "Number,X,Y,Direction\n1,0,0,Sideways\n").unwrap();
    let out = run(&["--no-plot", path.to_str().unwrap()], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown direction"));
}
