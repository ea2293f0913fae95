//! End-to-End Tests for the pomodoro-tui binary.
//!
//! These tests run the compiled binary the way a user would:
//! - Printing the effective configuration
//! - Config file and flag precedence
//! - Argument validation
//! - Shell completions
//! - Refusing to start without a terminal

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

/// Creates a command whose home and config directories point into `home`,
/// so a config file on the host never leaks into the test.
fn pomodoro(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pomodoro-tui").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// print-config
// ============================================================================

mod print_config_tests {
    use super::*;

    #[test]
    fn test_print_config_defaults() {
        let home = TempDir::new().unwrap();
        pomodoro(home.path())
            .arg("print-config")
            .assert()
            .success()
            .stdout(predicate::str::contains("work_minutes = 25"))
            .stdout(predicate::str::contains("break_minutes = 5"))
            .stdout(predicate::str::contains("theme = \"light\""))
            .stdout(predicate::str::contains("notifications = true"));
    }

    #[test]
    fn test_print_config_with_flags() {
        let home = TempDir::new().unwrap();
        pomodoro(home.path())
            .args([
                "--work",
                "50",
                "-b",
                "10",
                "--dark",
                "--no-notify",
                "print-config",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("work_minutes = 50"))
            .stdout(predicate::str::contains("break_minutes = 10"))
            .stdout(predicate::str::contains("theme = \"dark\""))
            .stdout(predicate::str::contains("notifications = false"));
    }

    #[test]
    fn test_print_config_reads_file() {
        let home = TempDir::new().unwrap();
        let path = write_config(&home, "work_minutes = 45\ntheme = \"dark\"\n");

        pomodoro(home.path())
            .arg("--config")
            .arg(&path)
            .arg("print-config")
            .assert()
            .success()
            .stdout(predicate::str::contains("work_minutes = 45"))
            .stdout(predicate::str::contains("break_minutes = 5"))
            .stdout(predicate::str::contains("theme = \"dark\""));
    }

    #[test]
    fn test_flags_override_file() {
        let home = TempDir::new().unwrap();
        let path = write_config(&home, "work_minutes = 45\n");

        pomodoro(home.path())
            .arg("--config")
            .arg(&path)
            .args(["-w", "15", "print-config"])
            .assert()
            .success()
            .stdout(predicate::str::contains("work_minutes = 15"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_default_config_location_is_used() {
        let home = TempDir::new().unwrap();
        let config_dir = home.path().join(".config").join("pomodoro-tui");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "break_minutes = 8\n").unwrap();

        pomodoro(home.path())
            .arg("print-config")
            .assert()
            .success()
            .stdout(predicate::str::contains("break_minutes = 8"));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_missing_explicit_config_fails() {
        let home = TempDir::new().unwrap();
        pomodoro(home.path())
            .args(["--config", "/definitely/not/here.toml", "print-config"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"))
            .stderr(predicate::str::contains("failed to read config file"));
    }

    #[test]
    fn test_invalid_config_value_fails() {
        let home = TempDir::new().unwrap();
        let path = write_config(&home, "work_minutes = 0\n");

        pomodoro(home.path())
            .arg("--config")
            .arg(&path)
            .arg("print-config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Time must be greater than 0"));
    }

    #[test]
    fn test_malformed_config_fails() {
        let home = TempDir::new().unwrap();
        let path = write_config(&home, "work_minutes = \"lots\"\n");

        pomodoro(home.path())
            .arg("--config")
            .arg(&path)
            .arg("print-config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config file"));
    }

    #[test]
    fn test_out_of_range_flag_rejected() {
        let home = TempDir::new().unwrap();
        pomodoro(home.path())
            .args(["--work", "0"])
            .assert()
            .failure();
        pomodoro(home.path())
            .args(["--break-time", "121"])
            .assert()
            .failure();
    }

    #[test]
    fn test_run_without_terminal_fails() {
        let home = TempDir::new().unwrap();
        pomodoro(home.path())
            .arg("--no-notify")
            .assert()
            .failure()
            .stderr(predicate::str::contains("requires a terminal"));
    }
}

// ============================================================================
// Completions
// ============================================================================

mod completions_tests {
    use super::*;

    #[test]
    fn test_bash_completions() {
        let home = TempDir::new().unwrap();
        pomodoro(home.path())
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("pomodoro-tui"));
    }

    #[test]
    fn test_unknown_shell_rejected() {
        let home = TempDir::new().unwrap();
        pomodoro(home.path())
            .args(["completions", "cmd"])
            .assert()
            .failure();
    }
}
