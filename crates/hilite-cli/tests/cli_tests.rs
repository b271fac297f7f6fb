//! Runs the compiled binaries in a scratch working directory.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// `hilite` in `dir` with none of the caller's HILITE_* or RUST_LOG settings
fn hilite_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hilite"));
    cmd.current_dir(dir.path())
        .env_remove("HILITE_INPUT")
        .env_remove("HILITE_OUTPUT")
        .env_remove("HILITE_INCLUDES")
        .env_remove("HILITE_TRACE")
        .env_remove("RUST_LOG");
    cmd
}

fn hilite_in(dir: &TempDir) -> Output {
    hilite_cmd(dir).output().unwrap()
}

#[test]
fn test_missing_input_exits_with_one() {
    let dir = TempDir::new().unwrap();

    let output = hilite_in(&dir);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input.cpp"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("output.html").exists());
}

#[test]
fn test_file_round_trip_echoes_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.cpp"), "#include <iostream>\nint main() { return 0; }").unwrap();

    let output = hilite_in(&dir);

    assert_eq!(output.status.code(), Some(0));
    let written = fs::read(dir.path().join("output.html")).unwrap();
    assert_eq!(output.stdout, written);
    let html = String::from_utf8(written).unwrap();
    assert!(html.starts_with("<pre>#in-clude &lt;iostream&gt;\n"));
    assert!(html.contains("<span style='color: blue;'>return</span> 0;"));
}

#[test]
fn test_env_overrides_file_names() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.c"), "float f;").unwrap();

    let output = hilite_cmd(&dir)
        .env("HILITE_INPUT", "a.c")
        .env("HILITE_OUTPUT", "a.html")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(dir.path().join("a.html").exists());
    assert!(!dir.path().join("output.html").exists());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_error_reported_once() {
    let dir = TempDir::new().unwrap();

    let output = hilite_in(&dir);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {}", stderr);
    assert!(stderr.starts_with("error: INPUT/"));
}

#[test]
fn test_demo_prints_sample() {
    let output = Command::new(env!("CARGO_BIN_EXE_hilite-demo"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("<pre>"));
    assert!(stdout.ends_with("</pre>\n"));
    assert!(stdout.contains("<span style='color: red;'>\"Hello, World!\"</span>"));
}
