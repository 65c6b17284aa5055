//! End-to-end tests for the jobsets CLI.
//!
//! The interactive table needs a terminal, so these tests drive the headless
//! `render` and `diagnostics` subcommands and the error paths.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const FIXTURE: &str = "tests/fixtures/job_sets.json";

/// Get a Command for the jobsets binary with a clean environment.
#[allow(deprecated)]
fn jobsets_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jobsets").unwrap();
    cmd.env_remove("NO_COLOR")
        .env_remove("JOBSETS_SEED")
        .env_remove("JOBSETS_CONFIG")
        .env_remove("JOBSETS_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// Render
// =============================================================================

mod render {
    use super::*;

    #[test]
    fn prints_header_and_one_line_per_job_set() {
        let output = jobsets_cmd()
            .args(["--input", FIXTURE, "render", "--width", "120"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 4);
        for label in [
            "Job Set",
            "Submission Time ▼",
            "Queued",
            "Pending",
            "Running",
            "Succeeded",
            "Failed",
        ] {
            assert!(lines[0].contains(label), "header missing {label}");
        }
        assert!(lines[1].starts_with("[ ] nightly-etl"));
        assert!(lines[2].starts_with("[ ] model-train"));
        assert!(lines[3].starts_with("[ ] backfill-2026-09"));
        assert!(!stdout.contains('\u{1b}'));
    }

    #[test]
    fn oldest_first_reverses_rows() {
        let output = jobsets_cmd()
            .args(["--input", FIXTURE, "--oldest-first", "render"])
            .output()
            .unwrap();
        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert!(lines[0].contains("Submission Time ▲"));
        assert!(lines[1].starts_with("[ ] backfill-2026-09"));
    }

    #[test]
    fn selected_rows_are_checked() {
        jobsets_cmd()
            .args(["--input", FIXTURE, "render", "--select", "model-train"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("[x] Job Set"))
            .stdout(predicate::str::contains("[x] model-train"))
            .stdout(predicate::str::contains("[ ] nightly-etl"));
    }

    #[test]
    fn unknown_selection_fails() {
        jobsets_cmd()
            .args(["--input", FIXTURE, "render", "--select", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown job set id: nope"));
    }

    #[test]
    fn height_limits_rows() {
        let output = jobsets_cmd()
            .args(["--seed", "7", "--count", "50", "render", "--height", "6"])
            .output()
            .unwrap();
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), 6);
    }

    #[test]
    fn generated_data_is_deterministic() {
        let run = || {
            jobsets_cmd()
                .args(["--seed", "42", "--count", "20", "render"])
                .output()
                .unwrap()
                .stdout
        };
        let first = run();
        assert_eq!(first, run());
        assert_eq!(String::from_utf8(first).unwrap().lines().count(), 21);
    }

    #[test]
    fn empty_list_renders_disabled_header_only() {
        let input = temp_file("[]");
        jobsets_cmd()
            .arg("--input")
            .arg(input.path())
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("[ ] Job Set"));
    }

    #[test]
    fn renders_with_no_color_env() {
        jobsets_cmd()
            .env("NO_COLOR", "1")
            .args(["--input", FIXTURE, "render"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[ ] nightly-etl"));
    }

    #[test]
    fn config_file_hides_columns() {
        let config = temp_file("[columns]\njobSetId = 0.5\njobsFailed = 0.5\n");
        jobsets_cmd()
            .arg("--config")
            .arg(config.path())
            .args(["--input", FIXTURE, "render"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Failed"))
            .stdout(predicate::str::contains("Queued").not());
    }
}

// =============================================================================
// Errors
// =============================================================================

mod errors {
    use super::*;

    #[test]
    fn missing_input_file() {
        jobsets_cmd()
            .args(["--input", "/nonexistent/job_sets.json", "render"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot read"));
    }

    #[test]
    fn duplicate_ids() {
        let input = temp_file(r#"[{"jobSetId": "a"}, {"jobSetId": "a"}]"#);
        jobsets_cmd()
            .arg("--input")
            .arg(input.path())
            .arg("render")
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate job set id: a"));
    }

    #[test]
    fn invalid_weight_in_config() {
        let config = temp_file("[columns]\njobsFailed = -0.1\n");
        jobsets_cmd()
            .arg("--config")
            .arg(config.path())
            .arg("render")
            .assert()
            .failure()
            .stderr(predicate::str::contains("jobsFailed"));
    }

    #[test]
    fn interactive_mode_needs_a_terminal() {
        jobsets_cmd()
            .args(["--input", FIXTURE])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a terminal"));
    }
}

// =============================================================================
// Diagnostics and logging
// =============================================================================

mod diagnostics {
    use super::*;

    #[test]
    fn shows_resolved_config() {
        jobsets_cmd()
            .args(["--seed", "3", "--no-mouse", "diagnostics"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Mouse: off"))
            .stdout(predicate::str::contains("seed Some(3)"));
    }

    #[test]
    fn no_color_env_turns_color_off() {
        jobsets_cmd()
            .env("NO_COLOR", "1")
            .arg("diagnostics")
            .assert()
            .success()
            .stdout(predicate::str::contains("Color: off"));
    }

    #[test]
    fn empty_no_color_env_is_ignored() {
        jobsets_cmd()
            .env("NO_COLOR", "")
            .arg("diagnostics")
            .assert()
            .success()
            .stdout(predicate::str::contains("Color: on"));
    }

    #[test]
    fn writes_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let log = dir.path().join("jobsets.log");
        jobsets_cmd()
            .arg("--log-file")
            .arg(&log)
            .args(["-v", "--seed", "1", "--count", "3", "render"])
            .assert()
            .success();
        let text = std::fs::read_to_string(&log).unwrap();
        assert!(text.contains("generating job sets"));
    }
}
