//! Configuration management CLI commands.

use crate::cli::common::{config_path, load_config, print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::Path;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Write the default configuration
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write the default configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, explicit: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Path => {
                println!("{}", config_path(explicit)?.display());
                Ok(())
            }
            ConfigCommand::Show(args) => args.execute(explicit),
            ConfigCommand::Init(args) => args.execute(explicit),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, explicit: Option<&Path>) -> CliResult<()> {
        let config = load_config(explicit)?;

        if self.json {
            return print_json(&config);
        }

        let toml = toml::to_string_pretty(&config)
            .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
        print!("{toml}");
        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self, explicit: Option<&Path>) -> CliResult<()> {
        let path = config_path(explicit)?;
        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Configuration already exists at {}. Use --force to overwrite.",
                path.display()
            )));
        }

        Config::default()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Wrote default configuration to {}", path.display());
        Ok(())
    }
}
