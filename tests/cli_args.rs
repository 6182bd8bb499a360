//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal is taken over are exercised.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn counter_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_counter-tui"))
}

#[test]
fn test_help_lists_flags() {
    let output = counter_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-level"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_version_prints_crate_version() {
    let output = counter_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_broken_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui\n").unwrap();

    let output = counter_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to parse config file"));
}

#[test]
fn test_invalid_config_value_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui]\npoll_interval_ms = 0\n").unwrap();

    let output = counter_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}

#[test]
fn test_bad_log_filter_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("counter.log");

    let output = counter_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("--log-level")
        .arg("counter_tui=loud")
        .arg("--log-file")
        .arg(&log_file)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log filter"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let app_dir = temp_dir.path().join("counter-tui");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("config.toml"), "[ui\n").unwrap();

    let output = counter_cmd()
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to parse config file"));
}
