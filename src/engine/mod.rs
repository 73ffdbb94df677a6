//! Value-encoding engine.
//!
//! Maps a flat value (total sub-units as a digit string) to one row per
//! wheel and back, for the wheel layout a [`Configuration`] describes.
//! The engine is a pure function of the configuration, the choice source
//! (Custom mode only) and its input; it holds no state between calls.
//!
//! # Examples
//!
//! ```
//! use inline_picker::engine::Encoder;
//! use inline_picker::models::{Configuration, DigitGrouping};
//!
//! let config = Configuration::number(DigitGrouping::MyriadDecimal).with_prefix("$");
//! let encoder = Encoder::numeric(&config).unwrap();
//! let selection = encoder.decompose("123456789").into_selection().unwrap();
//! assert_eq!(selection.rows(), &[123, 4567, 89]);
//! assert_eq!(encoder.compose(&selection).unwrap(), "$123,4567.89");
//! ```

pub mod choices;
pub mod effects;
pub mod plan;

pub use choices::{ChoiceList, ChoiceSource, CustomEntryObserver, NoChoices};
pub use effects::ConfigChangeEffects;
pub use plan::{WheelKind, WheelPlan, WheelSpec};

use tracing::trace;

use crate::error::{EncodingError, EncodingResult};
use crate::models::{digits_only, Configuration, FlatValue, PickerMode, Selection};

/// Outcome of decomposing an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition {
    /// One row per wheel
    Selected(Selection),
    /// Custom-mode text that matches no choice; the selection stays as it was
    Unmatched(String),
}

impl Decomposition {
    /// The selection, if the input produced one.
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Selected(selection) => Some(selection),
            Self::Unmatched(_) => None,
        }
    }

    /// Consumes the outcome, keeping the selection.
    #[must_use]
    pub fn into_selection(self) -> Option<Selection> {
        match self {
            Self::Selected(selection) => Some(selection),
            Self::Unmatched(_) => None,
        }
    }

    /// The unmatched custom entry, if any.
    #[must_use]
    pub fn custom_entry(&self) -> Option<&str> {
        match self {
            Self::Selected(_) => None,
            Self::Unmatched(entry) => Some(entry),
        }
    }
}

/// Encoding engine bound to one configuration and choice source.
pub struct Encoder<'a> {
    config: &'a Configuration,
    choices: &'a dyn ChoiceSource,
    plan: WheelPlan,
}

impl<'a> Encoder<'a> {
    /// Binds `config` and `choices`.
    ///
    /// # Errors
    ///
    /// Fails when the configuration's precisions are out of range.
    pub fn new(config: &'a Configuration, choices: &'a dyn ChoiceSource) -> EncodingResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            choices,
            plan: WheelPlan::build(config),
        })
    }

    /// Binds `config` with no choice source (Custom mode then has no rows).
    ///
    /// # Errors
    ///
    /// Fails when the configuration's precisions are out of range.
    pub fn numeric(config: &'a Configuration) -> EncodingResult<Self> {
        Self::new(config, &NoChoices)
    }

    /// The bound configuration.
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        self.config
    }

    /// Per-wheel layout.
    #[must_use]
    pub const fn plan(&self) -> &WheelPlan {
        &self.plan
    }

    /// Number of wheels.
    #[must_use]
    pub fn wheel_count(&self) -> usize {
        self.plan.len()
    }

    fn spec(&self, wheel: usize) -> EncodingResult<&WheelSpec> {
        self.plan.wheel(wheel).ok_or(EncodingError::WheelOutOfRange {
            wheel,
            wheel_count: self.plan.len(),
        })
    }

    /// Rows on `wheel`.
    ///
    /// # Errors
    ///
    /// [`EncodingError::WheelOutOfRange`] for a wheel past the last one.
    pub fn row_count(&self, wheel: usize) -> EncodingResult<u64> {
        let spec = self.spec(wheel)?;
        Ok(spec
            .rows
            .unwrap_or_else(|| self.choices.choice_count() as u64))
    }

    /// Label shown for `row` on `wheel`.
    ///
    /// Numeric wheels are zero-padded to their width; Number mode adds the
    /// prefix to the first wheel and the suffix to the last one.
    ///
    /// # Errors
    ///
    /// Out-of-range wheel or row, or a choice source without a label for a
    /// row it counts.
    pub fn label_for_row(&self, wheel: usize, row: u64) -> EncodingResult<String> {
        let spec = self.spec(wheel)?;
        let row_count = self.row_count(wheel)?;
        if row >= row_count {
            return Err(EncodingError::RowOutOfRange {
                wheel,
                row,
                row_count,
            });
        }

        if spec.kind == WheelKind::Choice {
            return usize::try_from(row)
                .ok()
                .and_then(|index| self.choices.choice_label(index))
                .map(str::to_string)
                .ok_or(EncodingError::MissingChoiceLabel { row });
        }

        let mut label = spec.format_row(row);
        if self.config.mode == PickerMode::Number {
            if wheel == 0 {
                label.insert_str(0, &self.config.prefix);
            }
            if wheel + 1 == self.plan.len() {
                label.push_str(&self.config.suffix);
            }
        }
        Ok(label)
    }

    /// Splits typed text into one row per wheel.
    ///
    /// Numeric modes keep only the digits of `input` and treat text that
    /// does not parse as zero. Custom mode selects the choice equal to
    /// `input`, or reports it as unmatched.
    pub fn decompose(&self, input: &str) -> Decomposition {
        if self.config.mode == PickerMode::Custom {
            return self.match_choice(input);
        }
        self.decompose_value(FlatValue::from_text(input))
    }

    /// Splits a flat value into one row per wheel.
    ///
    /// Every row is within its wheel's range: time digit groups larger than
    /// the wheel's base select the last row, and a 0/500 wheel selects row 1
    /// from 500 ms upward. Custom mode matches the value's decimal text.
    pub fn decompose_value(&self, value: FlatValue) -> Decomposition {
        if self.config.mode == PickerMode::Custom {
            return self.match_choice(&value.to_string());
        }

        let rows = self
            .plan
            .wheels()
            .iter()
            .map(|spec| spec.row_for(value.get()))
            .collect::<Vec<_>>();
        trace!(value = %value, rows = ?rows, "decomposed flat value");
        Decomposition::Selected(Selection::new(rows))
    }

    fn match_choice(&self, input: &str) -> Decomposition {
        let found = (0..self.choices.choice_count())
            .find(|&row| self.choices.choice_label(row) == Some(input));
        match found {
            Some(row) => Decomposition::Selected(Selection::new(vec![row as u64])),
            None => {
                trace!(entry = input, "no matching choice");
                Decomposition::Unmatched(input.to_string())
            }
        }
    }

    /// Joins per-wheel labels into the display string.
    ///
    /// Labels are joined with the primary separator; in Number mode with a
    /// fractional wheel the last label is joined with the decimal
    /// separator. Custom mode returns its single label unchanged.
    pub fn recompose<S: AsRef<str>>(&self, labels: &[S]) -> String {
        if self.config.mode == PickerMode::Custom {
            return labels
                .first()
                .map(|label| label.as_ref().to_string())
                .unwrap_or_default();
        }

        let separators = self.config.resolve_separators();
        let Some((last, leading)) = labels.split_last() else {
            return String::new();
        };
        if leading.is_empty() {
            return last.as_ref().to_string();
        }

        let joined = leading
            .iter()
            .map(|label| label.as_ref())
            .collect::<Vec<&str>>()
            .join(&separators.primary);
        let tail_separator = if self.config.joins_with_decimal_separator() {
            &separators.decimal
        } else {
            &separators.primary
        };
        format!("{joined}{tail_separator}{}", last.as_ref())
    }

    /// Checks that `selection` has one in-range row per wheel.
    ///
    /// # Errors
    ///
    /// [`EncodingError::SelectionLength`] or [`EncodingError::RowOutOfRange`].
    pub fn check_selection(&self, selection: &Selection) -> EncodingResult<()> {
        if selection.len() != self.plan.len() {
            return Err(EncodingError::SelectionLength {
                expected: self.plan.len(),
                actual: selection.len(),
            });
        }
        for (wheel, &row) in selection.rows().iter().enumerate() {
            let row_count = self.row_count(wheel)?;
            if row >= row_count {
                return Err(EncodingError::RowOutOfRange {
                    wheel,
                    row,
                    row_count,
                });
            }
        }
        Ok(())
    }

    /// Labels of every selected row.
    ///
    /// # Errors
    ///
    /// Same as [`Encoder::check_selection`].
    pub fn labels(&self, selection: &Selection) -> EncodingResult<Vec<String>> {
        self.check_selection(selection)?;
        selection
            .rows()
            .iter()
            .enumerate()
            .map(|(wheel, &row)| self.label_for_row(wheel, row))
            .collect()
    }

    /// Display string of `selection`.
    ///
    /// # Errors
    ///
    /// Same as [`Encoder::check_selection`].
    pub fn compose(&self, selection: &Selection) -> EncodingResult<String> {
        let labels = self.labels(selection)?;
        Ok(self.recompose(&labels))
    }

    /// Flat value of `selection`, the inverse of [`Encoder::decompose_value`].
    ///
    /// Custom mode has no numeric value and yields zero.
    ///
    /// # Errors
    ///
    /// Same as [`Encoder::check_selection`].
    pub fn flat_value(&self, selection: &Selection) -> EncodingResult<FlatValue> {
        self.check_selection(selection)?;
        if self.config.mode == PickerMode::Custom {
            return Ok(FlatValue::ZERO);
        }
        let total = self
            .plan
            .wheels()
            .iter()
            .zip(selection.rows())
            .map(|(spec, &row)| spec.value_of(row))
            .sum();
        Ok(FlatValue::new(total))
    }

    /// Reads a display string back into a flat value.
    ///
    /// Strips the configured prefix and suffix, then keeps the digits.
    pub fn parse_display(&self, text: &str) -> FlatValue {
        let mut text = text;
        if self.config.mode == PickerMode::Number {
            text = text.strip_prefix(self.config.prefix.as_str()).unwrap_or(text);
            text = text.strip_suffix(self.config.suffix.as_str()).unwrap_or(text);
        }
        FlatValue::from_text(&digits_only(text))
    }
}
