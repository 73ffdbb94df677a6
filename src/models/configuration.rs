//! Picker configuration: mode plus the sub-options that shape its wheels.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DECIMAL_PRECISION, DEFAULT_DECIMAL_SEPARATOR, DEFAULT_NUMBER_PRECISION,
    DEFAULT_NUMBER_SEPARATOR, DEFAULT_TIME_SEPARATOR, MAX_PRECISION, MILLISECOND_DIGITS,
    MIN_PRECISION, TIME_GROUPING_SIZE,
};
use crate::error::{EncodingError, EncodingResult};
use crate::models::{DigitGrouping, PickerMode, TimePrecision};

/// How a flat value maps to wheels.
///
/// Wheel count and row counts are a pure function of this value (Custom
/// mode excepted, where the choice source supplies the rows). Every
/// combination of mode, time precision and digit grouping is valid;
/// only the two numeric precisions are bounded, see [`Configuration::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Kind of value edited
    pub mode: PickerMode,
    /// Wheel layout for Time/Duration
    pub time_precision: TimePrecision,
    /// Wheel layout for Number
    pub digit_grouping: DigitGrouping,
    /// Integer digits for Integer/Decimal grouping
    pub number_precision: u32,
    /// Digits of the fractional wheel in Number mode
    pub decimal_precision: u32,
    /// Text before the first wheel label (Number only)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    /// Text after the last wheel label (Number only)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub suffix: String,
    /// Overrides the separator between wheels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// Overrides the separator before the fractional wheel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_separator: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mode: PickerMode::default(),
            time_precision: TimePrecision::default(),
            digit_grouping: DigitGrouping::default(),
            number_precision: DEFAULT_NUMBER_PRECISION,
            decimal_precision: DEFAULT_DECIMAL_PRECISION,
            prefix: String::new(),
            suffix: String::new(),
            separator: None,
            decimal_separator: None,
        }
    }
}

/// Resolved separator strings joining wheel labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Separators {
    /// Between integer/time wheels
    pub primary: String,
    /// Before the last wheel when it is fractional
    pub decimal: String,
}

impl Configuration {
    /// Time-of-day picker.
    #[must_use]
    pub fn time(precision: TimePrecision) -> Self {
        Self {
            mode: PickerMode::Time,
            time_precision: precision,
            ..Self::default()
        }
    }

    /// Duration picker (same wheels as [`Configuration::time`]).
    #[must_use]
    pub fn duration(precision: TimePrecision) -> Self {
        Self {
            mode: PickerMode::Duration,
            time_precision: precision,
            ..Self::default()
        }
    }

    /// Number picker with the given digit grouping.
    #[must_use]
    pub fn number(grouping: DigitGrouping) -> Self {
        Self {
            mode: PickerMode::Number,
            digit_grouping: grouping,
            ..Self::default()
        }
    }

    /// Single-wheel picker backed by a choice source.
    #[must_use]
    pub fn custom() -> Self {
        Self {
            mode: PickerMode::Custom,
            ..Self::default()
        }
    }

    /// Sets the integer digit count.
    pub const fn with_number_precision(mut self, precision: u32) -> Self {
        self.number_precision = precision;
        self
    }

    /// Sets the fractional digit count.
    pub const fn with_decimal_precision(mut self, precision: u32) -> Self {
        self.decimal_precision = precision;
        self
    }

    /// Sets the prefix of the first label.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the suffix of the last label.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Overrides the primary separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Overrides the decimal separator.
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = Some(separator.into());
        self
    }

    /// Checks the numeric precisions.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::PrecisionOutOfRange`] when either precision
    /// lies outside `1..=18`.
    pub fn validate(&self) -> EncodingResult<()> {
        check_precision("number_precision", self.number_precision)?;
        check_precision("decimal_precision", self.decimal_precision)?;
        Ok(())
    }

    /// Number of wheels.
    #[must_use]
    pub const fn wheel_count(&self) -> usize {
        match self.mode {
            PickerMode::Time | PickerMode::Duration => self.time_precision.wheel_count(),
            PickerMode::Number => self.digit_grouping.wheel_count(),
            PickerMode::Custom => 1,
        }
    }

    /// Whether the last wheel is fractional (milliseconds or decimals).
    #[must_use]
    pub const fn has_fraction(&self) -> bool {
        match self.mode {
            PickerMode::Time | PickerMode::Duration => self.time_precision.has_milliseconds(),
            PickerMode::Number => self.digit_grouping.has_fraction(),
            PickerMode::Custom => false,
        }
    }

    /// Digits per integer wheel (0 for Custom).
    #[must_use]
    pub const fn grouping_size(&self) -> u32 {
        match self.mode {
            PickerMode::Time | PickerMode::Duration => TIME_GROUPING_SIZE,
            PickerMode::Number => self.digit_grouping.grouping_size(self.number_precision),
            PickerMode::Custom => 0,
        }
    }

    /// Digits of the fractional wheel.
    ///
    /// Milliseconds always take three digits; `decimal_precision` only
    /// applies to Number mode.
    #[must_use]
    pub const fn fraction_digits(&self) -> u32 {
        match self.mode {
            PickerMode::Time | PickerMode::Duration => MILLISECOND_DIGITS,
            PickerMode::Number => self.decimal_precision,
            PickerMode::Custom => 0,
        }
    }

    /// Whether the last label is joined with the decimal separator
    /// instead of the primary one.
    #[must_use]
    pub const fn joins_with_decimal_separator(&self) -> bool {
        matches!(self.mode, PickerMode::Number) && self.digit_grouping.has_fraction()
    }

    /// Resolves the separators, falling back to the mode defaults.
    ///
    /// `separator` and `decimal_separator` override independently. Time and
    /// Duration always join with the primary separator, so their decimal
    /// separator mirrors it.
    #[must_use]
    pub fn resolve_separators(&self) -> Separators {
        let (primary_default, decimal_default) = match self.mode {
            PickerMode::Time | PickerMode::Duration => {
                (DEFAULT_TIME_SEPARATOR, DEFAULT_TIME_SEPARATOR)
            }
            PickerMode::Number => (DEFAULT_NUMBER_SEPARATOR, DEFAULT_DECIMAL_SEPARATOR),
            PickerMode::Custom => ("", ""),
        };

        let primary = self
            .separator
            .clone()
            .unwrap_or_else(|| primary_default.to_string());
        let decimal = if self.mode.is_temporal() {
            primary.clone()
        } else {
            self.decimal_separator
                .clone()
                .unwrap_or_else(|| decimal_default.to_string())
        };

        Separators { primary, decimal }
    }
}

fn check_precision(field: &'static str, value: u32) -> EncodingResult<()> {
    if (MIN_PRECISION..=MAX_PRECISION).contains(&value) {
        Ok(())
    } else {
        Err(EncodingError::PrecisionOutOfRange {
            field,
            value,
            min: MIN_PRECISION,
            max: MAX_PRECISION,
        })
    }
}
