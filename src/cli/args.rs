//! Picker arguments shared by the headless commands.

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::engine::ChoiceList;
use crate::models::{Configuration, DigitGrouping, PickerMode, TimePrecision};

/// Selects a picker configuration: a preset, then explicit overrides.
#[derive(Debug, Clone, Default, Args)]
pub struct PickerArgs {
    /// Start from a preset in the config file
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Picker mode
    #[arg(short, long, value_enum)]
    pub mode: Option<PickerMode>,

    /// Wheel layout for time and duration
    #[arg(long, value_enum, value_name = "PRECISION")]
    pub time_precision: Option<TimePrecision>,

    /// Wheel layout for numbers
    #[arg(long, value_enum, value_name = "GROUPING")]
    pub digit_grouping: Option<DigitGrouping>,

    /// Integer digits for integer/decimal grouping (1-18)
    #[arg(long, value_name = "DIGITS")]
    pub number_precision: Option<u32>,

    /// Fractional digits for decimal groupings (1-18)
    #[arg(long, value_name = "DIGITS")]
    pub decimal_precision: Option<u32>,

    /// Text before the first number label
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Text after the last number label
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Separator between wheels
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Separator before the fractional wheel
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub decimal_separator: Option<String>,

    /// Custom-mode choice (repeatable, replaces the preset's choices)
    #[arg(long = "choice", value_name = "TEXT")]
    pub choices: Vec<String>,
}

/// Configuration and choices a command runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPicker {
    /// Validated configuration
    pub configuration: Configuration,
    /// Custom-mode choices
    pub choices: ChoiceList,
}

impl PickerArgs {
    /// Applies the preset and overrides, then validates.
    pub fn resolve(&self, config: &Config) -> CliResult<ResolvedPicker> {
        let (mut configuration, mut choices) = match &self.preset {
            Some(name) => {
                let preset = config.preset(name).ok_or_else(|| {
                    let known: Vec<&str> = config.preset_names().collect();
                    CliError::validation(format!(
                        "Unknown preset '{name}'. Available presets: {}",
                        known.join(", ")
                    ))
                })?;
                (preset.configuration.clone(), preset.choices.clone())
            }
            None => (Configuration::default(), Vec::new()),
        };

        if let Some(mode) = self.mode {
            configuration.mode = mode;
        }
        if let Some(precision) = self.time_precision {
            configuration.time_precision = precision;
        }
        if let Some(grouping) = self.digit_grouping {
            configuration.digit_grouping = grouping;
        }
        if let Some(precision) = self.number_precision {
            configuration.number_precision = precision;
        }
        if let Some(precision) = self.decimal_precision {
            configuration.decimal_precision = precision;
        }
        if let Some(prefix) = &self.prefix {
            configuration.prefix.clone_from(prefix);
        }
        if let Some(suffix) = &self.suffix {
            configuration.suffix.clone_from(suffix);
        }
        if let Some(separator) = &self.separator {
            configuration.separator = Some(separator.clone());
        }
        if let Some(separator) = &self.decimal_separator {
            configuration.decimal_separator = Some(separator.clone());
        }
        if !self.choices.is_empty() {
            choices.clone_from(&self.choices);
        }

        configuration.validate()?;

        Ok(ResolvedPicker {
            configuration,
            choices: ChoiceList::new(choices),
        })
    }
}
