//! Shared CLI error and output plumbing.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Process exit codes for headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: invalid configuration, out-of-range rows, unknown preset
    Validation = 1,
    /// Filesystem or serialization failure
    Io = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error carrying the message shown to the user and the exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Human-readable message
    pub message: String,
    /// Exit code for the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Validation,
        }
    }

    /// Filesystem or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Io,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<crate::error::EncodingError> for CliError {
    fn from(err: crate::error::EncodingError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Config file in use: `explicit` when given, else the platform default.
pub fn config_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}"))),
    }
}

/// Loads the config file in use, defaults when it doesn't exist.
pub fn load_config(explicit: Option<&Path>) -> CliResult<Config> {
    let path = config_path(explicit)?;
    Config::load_from(&path)
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}
