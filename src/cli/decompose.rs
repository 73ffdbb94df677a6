//! Text-to-rows command.

use crate::cli::args::PickerArgs;
use crate::cli::common::{load_config, print_json, CliResult};
use crate::engine::{Decomposition, Encoder};
use crate::models::{FlatValue, PickerMode};
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Split text into wheel rows
#[derive(Debug, Clone, Args)]
pub struct DecomposeArgs {
    /// Typed digits or a display string (prefix and suffix are stripped)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    #[command(flatten)]
    pub picker: PickerArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DecomposeOutput {
    input: String,
    matched: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rows: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<FlatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_entry: Option<String>,
}

impl DecomposeArgs {
    /// Execute the decompose command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let resolved = self.picker.resolve(&config)?;
        let encoder = Encoder::new(&resolved.configuration, &resolved.choices)?;

        let decomposition = if resolved.configuration.mode == PickerMode::Custom {
            encoder.decompose(&self.text)
        } else {
            encoder.decompose_value(encoder.parse_display(&self.text))
        };

        let output = match decomposition {
            Decomposition::Selected(selection) => DecomposeOutput {
                input: self.text.clone(),
                matched: true,
                labels: encoder.labels(&selection)?,
                display: Some(encoder.compose(&selection)?),
                value: resolved
                    .configuration
                    .mode
                    .is_numeric()
                    .then(|| encoder.flat_value(&selection))
                    .transpose()?,
                rows: selection.rows().to_vec(),
                custom_entry: None,
            },
            Decomposition::Unmatched(entry) => DecomposeOutput {
                input: self.text.clone(),
                matched: false,
                rows: Vec::new(),
                labels: Vec::new(),
                display: None,
                value: None,
                custom_entry: Some(entry),
            },
        };

        if self.json {
            return print_json(&output);
        }

        println!("Input:   {}", output.input);
        if let Some(entry) = &output.custom_entry {
            println!("Matched: no");
            println!("Custom:  {entry}");
            return Ok(());
        }
        let rows: Vec<String> = output.rows.iter().map(u64::to_string).collect();
        println!("Rows:    {}", rows.join(" "));
        println!("Labels:  {}", output.labels.join(" | "));
        if let Some(display) = &output.display {
            println!("Display: {display}");
        }
        if let Some(value) = output.value {
            println!("Value:   {value}");
        }

        Ok(())
    }
}
