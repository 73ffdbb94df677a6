//! Wheel metadata command.

use crate::cli::args::PickerArgs;
use crate::cli::common::{load_config, print_json, CliResult};
use crate::engine::Encoder;
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Show the wheels of a picker configuration
#[derive(Debug, Clone, Args)]
pub struct WheelsArgs {
    #[command(flatten)]
    pub picker: PickerArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct WheelsOutput {
    mode: String,
    wheel_count: usize,
    separator: String,
    decimal_separator: String,
    wheels: Vec<WheelOutput>,
}

#[derive(Debug, Serialize)]
struct WheelOutput {
    wheel: usize,
    rows: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last: Option<String>,
}

impl WheelsArgs {
    /// Execute the wheels command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let resolved = self.picker.resolve(&config)?;
        let encoder = Encoder::new(&resolved.configuration, &resolved.choices)?;
        let separators = resolved.configuration.resolve_separators();

        let wheels = (0..encoder.wheel_count())
            .map(|wheel| -> CliResult<WheelOutput> {
                let rows = encoder.row_count(wheel)?;
                let label = |row: u64| encoder.label_for_row(wheel, row).ok();
                Ok(WheelOutput {
                    wheel,
                    rows,
                    first: label(0),
                    last: rows.checked_sub(1).and_then(label),
                })
            })
            .collect::<CliResult<Vec<_>>>()?;

        let output = WheelsOutput {
            mode: resolved.configuration.mode.to_string(),
            wheel_count: wheels.len(),
            separator: separators.primary,
            decimal_separator: separators.decimal,
            wheels,
        };

        if self.json {
            return print_json(&output);
        }

        println!("Mode:       {}", output.mode);
        println!("Wheels:     {}", output.wheel_count);
        println!(
            "Separators: {:?} / {:?}",
            output.separator, output.decimal_separator
        );
        for wheel in &output.wheels {
            match (&wheel.first, &wheel.last) {
                (Some(first), Some(last)) => println!(
                    "  [{}] {} rows  {} .. {}",
                    wheel.wheel, wheel.rows, first, last
                ),
                _ => println!("  [{}] {} rows", wheel.wheel, wheel.rows),
            }
        }

        Ok(())
    }
}
