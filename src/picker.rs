//! Inline picker control state.
//!
//! Owns what a rendered picker needs between events: the configuration,
//! the text typed since the field gained focus, the selected rows and the
//! highlight flags. Typed text and the wheel selection stay in sync through
//! the [`Encoder`]: typing re-derives the selection, spinning a wheel
//! clears the typed text so the display falls back to the wheels.
//!
//! This module has no rendering dependency; `tui::inline_picker` draws it.

use tracing::{debug, info};

use crate::engine::{
    ChoiceSource, ConfigChangeEffects, CustomEntryObserver, Decomposition, Encoder,
};
use crate::error::EncodingResult;
use crate::models::{digits_only, Configuration, FlatValue, PickerMode, Selection};

/// Notifications for the host after an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The picker's value changed
    ValueChanged,
    /// The edited text changed
    EditingChanged,
    /// Custom-mode text matched no choice
    CustomEntry(String),
}

/// State of one inline picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinePicker {
    configuration: Configuration,
    text: String,
    selection: Selection,
    editing: bool,
    selecting: bool,
}

impl InlinePicker {
    /// Creates a picker with every wheel on row 0.
    ///
    /// # Errors
    ///
    /// Fails when the configuration's precisions are out of range.
    pub fn new(configuration: Configuration) -> EncodingResult<Self> {
        configuration.validate()?;
        let selection = Selection::zeroed(configuration.wheel_count());
        Ok(Self {
            configuration,
            text: String::new(),
            selection,
            editing: false,
            selecting: false,
        })
    }

    /// Current configuration.
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Selected rows.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Text typed since editing began (empty after a wheel spin).
    #[must_use]
    pub fn typed_text(&self) -> &str {
        &self.text
    }

    /// Whether keyboard entry is active.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether the user is spinning wheels.
    #[must_use]
    pub const fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// Whether the picker should be drawn in its highlight color.
    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        self.editing || self.selecting
    }

    /// Marks the start or end of a wheel drag.
    ///
    /// Ending a drag keeps the highlight while keyboard entry is active.
    pub fn set_selecting(&mut self, selecting: bool) {
        self.selecting = selecting || self.editing;
    }

    /// Binds the engine to this picker's configuration.
    ///
    /// # Errors
    ///
    /// Only when the configuration was invalid, which [`InlinePicker::new`]
    /// and [`InlinePicker::set_configuration`] rule out.
    pub fn encoder<'a>(&'a self, choices: &'a dyn ChoiceSource) -> EncodingResult<Encoder<'a>> {
        Encoder::new(&self.configuration, choices)
    }

    /// Replaces the configuration and reports what the host must refresh.
    ///
    /// The current numeric value carries over to the new wheel layout when
    /// both configurations are numeric.
    ///
    /// # Errors
    ///
    /// Rejects configurations whose precisions are out of range; the picker
    /// is left unchanged.
    pub fn set_configuration(
        &mut self,
        configuration: Configuration,
        choices: &dyn ChoiceSource,
    ) -> EncodingResult<ConfigChangeEffects> {
        configuration.validate()?;
        let effects = ConfigChangeEffects::between(&self.configuration, &configuration);

        let carried = if self.configuration.mode.is_numeric() && configuration.mode.is_numeric() {
            let encoder = self.encoder(choices)?;
            encoder.flat_value(&self.selection).ok()
        } else {
            None
        };

        self.configuration = configuration;
        self.selection = Selection::zeroed(self.configuration.wheel_count());
        if let Some(value) = carried {
            let encoder = Encoder::new(&self.configuration, choices)?;
            if let Some(selection) = encoder.decompose_value(value).into_selection() {
                self.selection = selection;
            }
        }
        self.reload_data(choices);

        debug!(
            mode = %self.configuration.mode,
            wheels = self.selection.len(),
            ?effects,
            "picker reconfigured"
        );
        Ok(effects)
    }

    /// Keyboard focus gained: typing starts from an empty field.
    pub fn begin_editing(&mut self) {
        self.text.clear();
        self.editing = true;
    }

    /// Keyboard focus lost.
    pub fn end_editing(&mut self) {
        self.editing = false;
        self.selecting = false;
    }

    /// Whether `c` can be typed in the current mode.
    #[must_use]
    pub fn accepts_char(&self, c: char) -> bool {
        if self.configuration.mode.is_numeric() {
            c.is_ascii_digit()
        } else {
            !c.is_control()
        }
    }

    /// Types one character.
    ///
    /// Numeric modes ignore everything but digits. Custom-mode text that
    /// matches no choice is handed to `choices` as a custom entry before
    /// the selection is re-derived, so an observer that appends the entry
    /// gets it selected.
    pub fn insert_char<C>(&mut self, c: char, choices: &mut C) -> Vec<PickerEvent>
    where
        C: ChoiceSource + CustomEntryObserver,
    {
        if !self.accepts_char(c) {
            return Vec::new();
        }
        self.text.push(c);
        self.text_did_change(choices)
    }

    /// Deletes the last typed character.
    pub fn delete_backward<C>(&mut self, choices: &mut C) -> Vec<PickerEvent>
    where
        C: ChoiceSource + CustomEntryObserver,
    {
        if self.text.pop().is_none() {
            return Vec::new();
        }
        self.text_did_change(choices)
    }

    fn text_did_change<C>(&mut self, choices: &mut C) -> Vec<PickerEvent>
    where
        C: ChoiceSource + CustomEntryObserver,
    {
        let mut events = Vec::new();
        let entry = self.apply_text(&*choices).custom_entry().map(str::to_string);

        if let Some(entry) = entry {
            if !entry.is_empty() {
                info!(entry = %entry, "custom entry observed");
                choices.custom_entry_observed(&entry);
                self.apply_text(&*choices);
                events.push(PickerEvent::CustomEntry(entry));
            }
        }

        events.push(PickerEvent::ValueChanged);
        events.push(PickerEvent::EditingChanged);
        events
    }

    /// Replaces the typed text and re-derives the selection.
    pub fn set_text(&mut self, text: impl Into<String>, choices: &dyn ChoiceSource) {
        self.text = text.into();
        self.reload_data(choices);
    }

    /// Re-derives the selection from the typed text.
    ///
    /// Numeric modes first drop non-digits from the text. Call after the
    /// choice source changed.
    pub fn reload_data(&mut self, choices: &dyn ChoiceSource) {
        if self.configuration.mode.is_numeric() {
            self.text = digits_only(&self.text);
        }
        self.apply_text(choices);
    }

    fn apply_text(&mut self, choices: &dyn ChoiceSource) -> Decomposition {
        if self.configuration.mode == PickerMode::Custom {
            let count = choices.choice_count() as u64;
            if self.selection.row(0).is_some_and(|row| row >= count) {
                self.selection = Selection::zeroed(1);
            }
        }
        if self.text.is_empty() {
            return Decomposition::Selected(self.selection.clone());
        }

        let decomposition = match self.encoder(choices) {
            Ok(encoder) => encoder.decompose(&self.text),
            Err(_) => return Decomposition::Selected(self.selection.clone()),
        };
        if let Some(selection) = decomposition.selection() {
            self.selection = selection.clone();
        }
        decomposition
    }

    /// Spins `wheel` to `row`, as a finished drag would.
    ///
    /// # Errors
    ///
    /// Out-of-range wheel or row; the selection is left unchanged.
    pub fn select_row(
        &mut self,
        wheel: usize,
        row: u64,
        choices: &dyn ChoiceSource,
    ) -> EncodingResult<Vec<PickerEvent>> {
        let encoder = Encoder::new(&self.configuration, choices)?;
        encoder.label_for_row(wheel, row)?;
        self.selection.set_row(wheel, row);
        self.text.clear();
        debug!(wheel, row, "row selected");
        Ok(vec![PickerEvent::ValueChanged, PickerEvent::EditingChanged])
    }

    /// Moves `wheel` by `delta` rows, wrapping around like an odometer.
    ///
    /// # Errors
    ///
    /// Out-of-range wheel.
    pub fn step_wheel(
        &mut self,
        wheel: usize,
        delta: i64,
        choices: &dyn ChoiceSource,
    ) -> EncodingResult<Vec<PickerEvent>> {
        let row_count = Encoder::new(&self.configuration, choices)?.row_count(wheel)?;
        if row_count == 0 {
            return Ok(Vec::new());
        }
        let current = i128::from(self.selection.row(wheel).unwrap_or(0));
        let next = (current + i128::from(delta)).rem_euclid(i128::from(row_count));
        self.select_row(wheel, u64::try_from(next).unwrap_or(0), choices)
    }

    /// The picker's text: what was typed, or else the wheels' display.
    ///
    /// # Errors
    ///
    /// Only when the selection no longer fits the choice source.
    pub fn text(&self, choices: &dyn ChoiceSource) -> EncodingResult<String> {
        if !self.text.is_empty() {
            return Ok(self.text.clone());
        }
        if self.configuration.mode == PickerMode::Custom && choices.choice_count() == 0 {
            return Ok(String::new());
        }
        self.encoder(choices)?.compose(&self.selection)
    }

    /// Numeric value of the selected rows, zero in Custom mode.
    ///
    /// # Errors
    ///
    /// Only when the selection no longer fits the wheels.
    pub fn value(&self, choices: &dyn ChoiceSource) -> EncodingResult<FlatValue> {
        if self.configuration.mode == PickerMode::Custom {
            return Ok(FlatValue::ZERO);
        }
        self.encoder(choices)?.flat_value(&self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ChoiceList, NoChoices};
    use crate::error::EncodingError;
    use crate::models::{DigitGrouping, TimePrecision};

    fn duration_picker() -> InlinePicker {
        InlinePicker::new(Configuration::time(TimePrecision::MinuteSecondMillisecondPer500))
            .unwrap()
    }

    #[test]
    fn test_new_picker_selects_row_zero() {
        let picker = duration_picker();
        assert_eq!(picker.selection().rows(), &[0, 0, 0]);
        assert_eq!(picker.text(&NoChoices).unwrap(), "0:00:000");
    }

    #[test]
    fn test_set_text_selects_rows() {
        let mut picker = duration_picker();
        picker.set_text("1230000", &NoChoices);
        assert_eq!(picker.selection().rows(), &[12, 30, 0]);
        assert_eq!(picker.text(&NoChoices).unwrap(), "1230000");
    }

    #[test]
    fn test_typing_filters_non_digits() {
        let mut picker = duration_picker();
        picker.begin_editing();
        let mut choices = NoChoices;
        assert!(picker.insert_char('x', &mut choices).is_empty());
        let events = picker.insert_char('5', &mut choices);
        assert_eq!(
            events,
            vec![PickerEvent::ValueChanged, PickerEvent::EditingChanged]
        );
        assert_eq!(picker.typed_text(), "5");
        assert_eq!(picker.selection().rows(), &[0, 0, 0]);

        for c in "00500".chars() {
            picker.insert_char(c, &mut choices);
        }
        // "500500" -> 5:00:500
        assert_eq!(picker.selection().rows(), &[5, 0, 1]);
    }

    #[test]
    fn test_delete_backward_reselects() {
        let mut picker = InlinePicker::new(Configuration::number(DigitGrouping::Decimal)).unwrap();
        let mut choices = NoChoices;
        picker.begin_editing();
        for c in "1234".chars() {
            picker.insert_char(c, &mut choices);
        }
        assert_eq!(picker.selection().rows(), &[12, 34]);
        picker.delete_backward(&mut choices);
        assert_eq!(picker.selection().rows(), &[1, 23]);
        assert!(picker.delete_backward(&mut choices).len() == 2);
        picker.delete_backward(&mut choices);
        picker.delete_backward(&mut choices);
        assert!(picker.delete_backward(&mut choices).is_empty());
    }

    #[test]
    fn test_select_row_clears_typed_text() {
        let mut picker = duration_picker();
        picker.set_text("1230000", &NoChoices);
        let events = picker.select_row(1, 45, &NoChoices).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(picker.typed_text(), "");
        assert_eq!(picker.text(&NoChoices).unwrap(), "12:45:000");
    }

    #[test]
    fn test_select_row_rejects_out_of_range() {
        let mut picker = duration_picker();
        let err = picker.select_row(2, 2, &NoChoices).unwrap_err();
        assert_eq!(
            err,
            EncodingError::RowOutOfRange {
                wheel: 2,
                row: 2,
                row_count: 2
            }
        );
        assert_eq!(picker.selection().rows(), &[0, 0, 0]);
    }

    #[test]
    fn test_step_wheel_wraps() {
        let mut picker = duration_picker();
        picker.step_wheel(1, -1, &NoChoices).unwrap();
        assert_eq!(picker.selection().row(1), Some(59));
        picker.step_wheel(1, 2, &NoChoices).unwrap();
        assert_eq!(picker.selection().row(1), Some(1));
        picker.step_wheel(2, 3, &NoChoices).unwrap();
        assert_eq!(picker.selection().row(2), Some(1));
    }

    #[test]
    fn test_custom_entry_is_observed_and_selected() {
        let mut choices = ChoiceList::new(["24mm", "35mm", "40mm"]);
        let mut picker = InlinePicker::new(Configuration::custom()).unwrap();
        picker.begin_editing();

        let events: Vec<PickerEvent> = "35mm"
            .chars()
            .flat_map(|c| picker.insert_char(c, &mut choices))
            .collect();
        assert_eq!(picker.selection().rows(), &[1]);
        // "3" and "35m" were custom entries along the way
        assert!(events.contains(&PickerEvent::CustomEntry("35m".to_string())));
        assert_eq!(choices.custom_entry(), Some("35m"));

        picker.begin_editing();
        let events: Vec<PickerEvent> = "99"
            .chars()
            .flat_map(|c| picker.insert_char(c, &mut choices))
            .collect();
        assert!(events.contains(&PickerEvent::CustomEntry("99".to_string())));
        assert_eq!(choices.choices().last().map(String::as_str), Some("99"));
        assert_eq!(picker.selection().rows(), &[3]);
        assert_eq!(picker.text(&choices).unwrap(), "99");
    }

    #[test]
    fn test_unappended_custom_entry_keeps_selection() {
        let mut choices = vec!["a".to_string(), "b".to_string()];
        let mut picker = InlinePicker::new(Configuration::custom()).unwrap();
        picker.select_row(0, 1, &choices).unwrap();

        let mut seen = Vec::new();
        let mut observed = Observed {
            choices: &choices,
            seen: &mut seen,
        };
        picker.begin_editing();
        picker.insert_char('z', &mut observed);
        assert_eq!(picker.selection().rows(), &[1]);
        assert_eq!(seen, vec!["z".to_string()]);
        choices.clear();
        assert_eq!(picker.text(&choices).unwrap(), "z");
    }

    struct Observed<'a> {
        choices: &'a Vec<String>,
        seen: &'a mut Vec<String>,
    }

    impl ChoiceSource for Observed<'_> {
        fn choice_count(&self) -> usize {
            self.choices.len()
        }

        fn choice_label(&self, row: usize) -> Option<&str> {
            self.choices.get(row).map(String::as_str)
        }
    }

    impl CustomEntryObserver for Observed<'_> {
        fn custom_entry_observed(&mut self, entry: &str) {
            self.seen.push(entry.to_string());
        }
    }

    #[test]
    fn test_set_configuration_carries_value() {
        let mut picker = InlinePicker::new(Configuration::number(DigitGrouping::Integer)).unwrap();
        picker.set_text("123456", &NoChoices);
        picker.select_row(0, 123_456, &NoChoices).unwrap();

        let effects = picker
            .set_configuration(Configuration::number(DigitGrouping::Thousand), &NoChoices)
            .unwrap();
        assert!(effects.wheel_count_changed);
        assert_eq!(picker.selection().rows(), &[0, 123, 456]);
        assert_eq!(picker.text(&NoChoices).unwrap(), "0,123,456");
    }

    #[test]
    fn test_set_configuration_rejects_invalid() {
        let mut picker = duration_picker();
        let invalid = Configuration::number(DigitGrouping::Integer).with_number_precision(0);
        assert!(picker.set_configuration(invalid, &NoChoices).is_err());
        assert_eq!(picker.configuration().mode, PickerMode::Time);
    }

    #[test]
    fn test_highlight_flags() {
        let mut picker = duration_picker();
        assert!(!picker.is_highlighted());
        picker.set_selecting(true);
        assert!(picker.is_highlighted());
        picker.set_selecting(false);
        assert!(!picker.is_highlighted());

        picker.begin_editing();
        picker.set_selecting(false);
        assert!(picker.is_selecting());
        picker.end_editing();
        assert!(!picker.is_highlighted());
    }

    #[test]
    fn test_custom_value_without_choices_is_zero() {
        let picker = InlinePicker::new(Configuration::custom()).unwrap();
        assert_eq!(picker.value(&NoChoices).unwrap(), FlatValue::ZERO);
        assert_eq!(picker.text(&NoChoices).unwrap(), "");
    }
}
