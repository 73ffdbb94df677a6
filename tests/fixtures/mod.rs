//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use inline_picker::config::{Config, PresetConfig};
use inline_picker::models::{Configuration, DigitGrouping};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the inline-picker binary
pub fn inline_picker_bin() -> &'static str {
    env!("CARGO_BIN_EXE_inline-picker")
}

/// Config path inside a fresh temp dir; the file itself doesn't exist.
///
/// Keep the `TempDir` alive for the duration of the test.
pub fn temp_config_path() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    (path, temp_dir)
}

/// Default presets plus a `weight` preset (thousand grouping, suffix).
pub fn config_with_weight_preset() -> Config {
    let mut config = Config::new();
    config.presets.push(PresetConfig::new(
        "weight",
        Configuration::number(DigitGrouping::ThousandDecimal)
            .with_decimal_precision(3)
            .with_suffix(" kg"),
    ));
    config
}

/// Writes `config` to a temp file.
pub fn write_temp_config(config: &Config) -> (PathBuf, TempDir) {
    let (path, temp_dir) = temp_config_path();
    config.save_to(&path).expect("Failed to write config");
    (path, temp_dir)
}

/// Runs the binary against `config_path` with `args`.
pub fn run_with_config(config_path: &Path, args: &[&str]) -> Output {
    Command::new(inline_picker_bin())
        .arg("--config")
        .arg(config_path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Runs the binary with the default presets.
pub fn run(args: &[&str]) -> Output {
    let (path, _temp_dir) = temp_config_path();
    run_with_config(&path, args)
}

/// Parses stdout as JSON, failing with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON ({e}). stdout: {stdout} stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Asserts a zero exit status, showing stderr otherwise.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
