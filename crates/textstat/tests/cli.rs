//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write `contents` to a temp file and return its handle.
fn input_file(contents: &str) -> tempfile::NamedTempFile {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), contents).unwrap();
    tmp
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["log_level"].is_string());
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_file_prints_report() {
    let tmp = input_file("First sentence. Second sentence! Third sentence?");
    cmd()
        .args(["analyze", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=== Text Analysis Result ==="))
        .stdout(predicate::str::contains("Word Count: 6"))
        .stdout(predicate::str::contains("Sentence Count: 3"))
        .stdout(predicate::str::contains("Average Word Length: 6.67"))
        .stdout(predicate::str::contains("Longest Word: sentence"))
        .stdout(predicate::str::ends_with("============================\n"));
}

#[test]
fn analyze_reads_stdin_when_no_file() {
    cmd()
        .arg("analyze")
        .write_stdin("The quick brown fox")
        .assert()
        .success()
        .stdout(predicate::str::contains("Word Count: 4"))
        .stdout(predicate::str::contains("Longest Word: quick"));
}

#[test]
fn analyze_dash_reads_stdin() {
    cmd()
        .args(["analyze", "-"])
        .write_stdin("Hello, world!")
        .assert()
        .success()
        .stdout(predicate::str::contains("Average Word Length: 5.00"));
}

#[test]
fn analyze_empty_input_prints_none() {
    cmd()
        .arg("analyze")
        .write_stdin("   \n\t ")
        .assert()
        .success()
        .stdout(predicate::str::contains("Word Count: 0"))
        .stdout(predicate::str::contains("Sentence Count: 0"))
        .stdout(predicate::str::contains("Longest Word: (none)"));
}

#[test]
fn analyze_json_outputs_result_fields() {
    let tmp = input_file("Really? Yes! I agree.");
    let output = cmd()
        .args(["analyze", tmp.path().to_str().unwrap(), "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("analyze --json should output valid JSON");

    assert_eq!(json["word_count"], 4);
    assert_eq!(json["sentence_count"], 3);
    assert_eq!(json["longest_word"], "Really");
    assert_eq!(json["average_word_length"], 3.75);
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/definitely/not/a/real/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn analyze_respects_input_limit() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".textstat.toml"), "max_input_bytes = 8\n").unwrap();
    std::fs::write(dir.path().join("input.txt"), "This is longer than eight bytes.").unwrap();

    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "analyze", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn analyze_disabled_limit_allows_large_input() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".textstat.toml"),
        "max_input_bytes = 8\ndisable_input_limit = true\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("input.txt"), "This is longer than eight bytes.").unwrap();

    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "analyze", "input.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word Count: 6"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn log_file_receives_json_events() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("run.jsonl");

    cmd()
        .env_remove("RUST_LOG")
        .env("TEXTSTAT_LOG_PATH", &log_path)
        .args(["-v", "analyze", "-"])
        .write_stdin("Some words here.")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let first = contents.lines().next().expect("log file should not be empty");
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(event["level"].is_string());
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_log_level_shows_error() {
    cmd()
        .args(["--log-level", "loud", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
