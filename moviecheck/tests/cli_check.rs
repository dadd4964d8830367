//! CLI tests for `moviecheck check`, `moviecheck palindrome` and `moviecheck init`.
//!
//! Spawns the binary and verifies exit codes and report output against the
//! fixtures in `tests/fixtures/`.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use moviecheck::exit_codes;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn moviecheck(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_moviecheck"));
    cmd.current_dir(cwd);
    cmd
}

#[test]
fn conforming_batch_exits_ok() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = moviecheck(temp.path())
        .arg("check")
        .arg(fixture("conforming.json"))
        .output()
        .expect("moviecheck check");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(exit_codes::OK), "{stdout}");
    assert!(stdout.contains("summary: 6 passed, 0 failed, 0 rejected"));
}

#[test]
fn dash_reads_response_from_stdin() {
    let temp = tempfile::tempdir().expect("tempdir");
    let body = std::fs::read(fixture("conforming.json")).expect("read fixture");
    let mut child = moviecheck(temp.path())
        .args(["check", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn moviecheck");
    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(&body)
        .expect("write stdin");
    let output = child.wait_with_output().expect("moviecheck check");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(exit_codes::OK), "{stdout}");
    assert!(stdout.contains("summary: 6 passed, 0 failed, 0 rejected"));
}

/// With `RUST_LOG` unset, rejected records still show up on stderr.
#[test]
fn rejected_records_are_logged_by_default() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = moviecheck(temp.path())
        .env_remove("RUST_LOG")
        .arg("check")
        .arg(fixture("batman.json"))
        .output()
        .expect("moviecheck check");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rejecting malformed record"), "{stderr}");
    assert!(!stderr.contains("checks complete"), "{stderr}");
}

#[test]
fn failing_batch_exits_with_failed_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = moviecheck(temp.path())
        .arg("check")
        .arg(fixture("batman.json"))
        .output()
        .expect("moviecheck check");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    assert!(stdout.contains("[FAIL] SPL-001"));
    assert!(stdout.contains("null poster_path shared by 2 records: Batman Returns, Batman Forever"));
    assert!(stdout.contains("[FAIL] SPL-002"));
    assert!(stdout.contains("[FAIL] SPL-003"));
    assert!(stdout.contains("index 4: missing required field 'id'"));
}

#[test]
fn json_format_with_expectations() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = moviecheck(temp.path())
        .args(["check", "--format", "json", "--expect-title", "Paris", "--expect-count", "6"])
        .arg(fixture("conforming.json"))
        .output()
        .expect("moviecheck check");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report json");
    assert_eq!(report["passed"], true);
    let codes: Vec<&str> = report["entries"]
        .as_array()
        .expect("entries")
        .iter()
        .filter_map(|entry| entry["code"].as_str())
        .collect();
    assert_eq!(
        codes,
        vec!["SPL-001", "SPL-002", "SPL-003", "SPL-004", "SPL-005", "SPL-006", "EXT-001", "EXT-002"]
    );
}

#[test]
fn config_file_relaxes_shared_null_posters() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        temp.path().join("moviecheck.toml"),
        "[posters]\nallow_shared_null = true\n",
    )
    .expect("write config");
    let output = moviecheck(temp.path())
        .arg("check")
        .arg(fixture("batman.json"))
        .output()
        .expect("moviecheck check");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[PASS] SPL-001"), "{stdout}");
}

#[test]
fn missing_input_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let status = moviecheck(temp.path())
        .args(["check", "does-not-exist.json"])
        .status()
        .expect("moviecheck check");
    assert_eq!(status.code(), Some(exit_codes::INVALID));
}

#[test]
fn palindrome_command() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = moviecheck(temp.path())
        .args(["palindrome", "kayak"])
        .output()
        .expect("moviecheck palindrome");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "true");

    let status = moviecheck(temp.path())
        .args(["palindrome", "ka yak"])
        .status()
        .expect("moviecheck palindrome");
    assert_eq!(status.code(), Some(exit_codes::INVALID));
}

#[test]
fn init_writes_loadable_config() {
    let temp = tempfile::tempdir().expect("tempdir");
    let status = moviecheck(temp.path())
        .arg("init")
        .status()
        .expect("moviecheck init");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let cfg = moviecheck::io::config::load_config(&temp.path().join("moviecheck.toml"))
        .expect("load config");
    assert_eq!(cfg, moviecheck::io::config::CheckConfig::default());

    let status = moviecheck(temp.path())
        .arg("init")
        .status()
        .expect("moviecheck init again");
    assert_eq!(status.code(), Some(exit_codes::INVALID));
}
