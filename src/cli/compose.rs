//! Rows-to-text command.

use crate::cli::args::PickerArgs;
use crate::cli::common::{load_config, print_json, CliResult};
use crate::engine::Encoder;
use crate::models::{FlatValue, Selection};
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Build the display string of selected rows
#[derive(Debug, Clone, Args)]
pub struct ComposeArgs {
    /// One row index per wheel, left to right
    #[arg(value_name = "ROW", required = true, num_args = 1..)]
    pub rows: Vec<u64>,

    #[command(flatten)]
    pub picker: PickerArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ComposeOutput {
    rows: Vec<u64>,
    labels: Vec<String>,
    display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<FlatValue>,
}

impl ComposeArgs {
    /// Execute the compose command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let resolved = self.picker.resolve(&config)?;
        let encoder = Encoder::new(&resolved.configuration, &resolved.choices)?;

        let selection = Selection::new(self.rows.clone());
        let labels = encoder.labels(&selection)?;
        let output = ComposeOutput {
            rows: self.rows.clone(),
            display: encoder.recompose(&labels),
            labels,
            value: if resolved.configuration.mode.is_numeric() {
                Some(encoder.flat_value(&selection)?)
            } else {
                None
            },
        };

        if self.json {
            return print_json(&output);
        }

        println!("Labels:  {}", output.labels.join(" | "));
        println!("Display: {}", output.display);
        if let Some(value) = output.value {
            println!("Value:   {value}");
        }

        Ok(())
    }
}
