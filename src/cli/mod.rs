//! CLI command handlers for Inline Picker.
//!
//! This module provides headless, scriptable access to the encoding engine
//! for automation and testing.

pub mod args;
pub mod common;
pub mod compose;
pub mod config;
pub mod decompose;
pub mod wheels;

// Re-export types used by main.rs and tests
pub use args::PickerArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use compose::ComposeArgs;
pub use config::ConfigArgs;
pub use decompose::DecomposeArgs;
pub use wheels::WheelsArgs;
