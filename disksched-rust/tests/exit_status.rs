// Unwrapping is okay here, since we want unexpected outcomes to fail tests.
#![allow(clippy::unwrap_used)]
use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;
use test_log::test; // We want to see logs while testing.

fn disksched(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_disksched"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_and_version_succeed() {
    for flag in ["--help", "--version"] {
        let output = disksched(&[flag]);
        assert_eq!(output.status.code(), Some(0), "{flag}");
        assert!(!output.stdout.is_empty(), "{flag} printed nothing");
    }
}

#[test]
fn missing_positional_is_a_usage_error() {
    let output = disksched(&["53"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).to_lowercase().contains("error"));
    assert!(output.stdout.is_empty());
}

#[test]
fn bad_direction_exits_one() {
    let output = disksched(&["53", "UP"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_of(&output),
        "ERROR: Direction must be LEFT or RIGHT (got `UP`).\n"
    );
}

#[test]
fn head_out_of_range_exits_one() {
    let output = disksched(&["300", "LEFT"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).starts_with("ERROR: Initial head must be between 0 and 299"));
}

#[test]
fn missing_request_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.bin");
    let output = disksched(&["-i", path.to_str().unwrap(), "53", "RIGHT"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).starts_with("ERROR: Could not open "));
    assert!(output.stdout.is_empty());
}

#[test]
fn successful_run_prints_the_report() {
    let mut file = NamedTempFile::new().unwrap();
    for value in [98i32, 183, 37, 122, 14, 124, 65, 67] {
        file.write_all(&value.to_ne_bytes()).unwrap();
    }
    file.flush().unwrap();

    let output = disksched(&[
        "-i",
        file.path().to_str().unwrap(),
        "-n",
        "8",
        "-c",
        "200",
        "-s",
        "S",
        "53",
        "RIGHT",
    ]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Total requests = 8\n"));
    assert!(stdout.contains("65, 67, 37, 14, 98, 122, 124, 183\n"));
    assert!(stdout.contains("SSTF - Total head movements = 236\n"));
}
