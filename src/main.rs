//! Inline Picker - odometer-style value entry in the terminal
//!
//! Without a subcommand this starts the interactive demo, one picker per
//! configured preset. The subcommands expose the encoding engine for
//! scripting.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inline_picker::cli::common::load_config;
use inline_picker::cli::{
    CliError, CliResult, ComposeArgs, ConfigArgs, DecomposeArgs, ExitCode, WheelsArgs,
};

/// Inline Picker - spin wheels to enter times, durations, numbers and choices
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file (the interactive demo logs nowhere else)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show wheel count, row counts and separators
    Wheels(WheelsArgs),
    /// Split text into wheel rows
    Decompose(DecomposeArgs),
    /// Build the display string of selected rows
    Compose(ComposeArgs),
    /// Manage the config file
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool, log_file: Option<&Path>, interactive: bool) -> anyhow::Result<()> {
    let filter = if verbose { "debug" } else { "warn" };

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    // Raw-mode output would corrupt the demo screen
    let stderr_layer =
        (!interactive).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(feature = "ratatui")]
fn run_interactive(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    inline_picker::tui::run_demo(&config).map_err(|e| CliError::io(format!("{e:#}")))
}

#[cfg(not(feature = "ratatui"))]
fn run_interactive(config_path: Option<&Path>) -> CliResult<()> {
    load_config(config_path)?;
    Err(CliError::validation(
        "The interactive demo needs the `ratatui` feature; use a subcommand instead",
    ))
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose, cli.log_file.as_deref(), cli.command.is_none()) {
        eprintln!("Error: {e:#}");
        std::process::exit(ExitCode::Io.code());
    }

    let config_path = cli.config.as_deref();
    let result = match &cli.command {
        Some(Command::Wheels(args)) => args.execute(config_path),
        Some(Command::Decompose(args)) => args.execute(config_path),
        Some(Command::Compose(args)) => args.execute(config_path),
        Some(Command::Config(args)) => args.execute(config_path),
        None => run_interactive(config_path),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
