//! Collaborators for Custom mode: where choices come from and who hears
//! about entries that match none of them.

use serde::{Deserialize, Serialize};

/// Supplies the rows of a Custom-mode wheel.
pub trait ChoiceSource {
    /// Number of choices.
    fn choice_count(&self) -> usize;

    /// Label of choice `row`, `None` past the end.
    fn choice_label(&self, row: usize) -> Option<&str>;
}

/// Notified when typed Custom-mode text matches no choice.
pub trait CustomEntryObserver {
    /// A custom entry was typed.
    fn custom_entry_observed(&mut self, entry: &str);
}

impl<F: FnMut(&str)> CustomEntryObserver for F {
    fn custom_entry_observed(&mut self, entry: &str) {
        self(entry);
    }
}

/// Choice source with no choices, for numeric modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoChoices;

impl ChoiceSource for NoChoices {
    fn choice_count(&self) -> usize {
        0
    }

    fn choice_label(&self, _row: usize) -> Option<&str> {
        None
    }
}

impl CustomEntryObserver for NoChoices {
    fn custom_entry_observed(&mut self, _entry: &str) {}
}

impl ChoiceSource for [String] {
    fn choice_count(&self) -> usize {
        self.len()
    }

    fn choice_label(&self, row: usize) -> Option<&str> {
        self.get(row).map(String::as_str)
    }
}

impl ChoiceSource for Vec<String> {
    fn choice_count(&self) -> usize {
        self.len()
    }

    fn choice_label(&self, row: usize) -> Option<&str> {
        self.get(row).map(String::as_str)
    }
}

/// Ordered in-memory choices with a fixed set of originals.
///
/// Observing a custom entry resets the list to the originals and appends
/// the entry, so at most one custom entry is offered at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChoiceList {
    originals: Vec<String>,
    choices: Vec<String>,
}

impl ChoiceList {
    /// Creates a list whose originals are `choices`.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let originals: Vec<String> = choices.into_iter().map(Into::into).collect();
        Self {
            choices: originals.clone(),
            originals,
        }
    }

    /// Current choices, custom entry included.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The choices the list was created with.
    #[must_use]
    pub fn originals(&self) -> &[String] {
        &self.originals
    }

    /// The appended custom entry, if any.
    #[must_use]
    pub fn custom_entry(&self) -> Option<&str> {
        self.choices
            .get(self.originals.len())
            .map(String::as_str)
    }

    /// Records a typed entry. Returns `true` when the choices changed.
    pub fn observe_entry(&mut self, entry: &str) -> bool {
        if self.originals.iter().any(|choice| choice == entry) {
            return false;
        }
        let changed = self.custom_entry() != Some(entry);
        self.choices.truncate(self.originals.len());
        self.choices.push(entry.to_string());
        changed
    }
}

impl ChoiceSource for ChoiceList {
    fn choice_count(&self) -> usize {
        self.choices.len()
    }

    fn choice_label(&self, row: usize) -> Option<&str> {
        self.choices.get(row).map(String::as_str)
    }
}

impl CustomEntryObserver for ChoiceList {
    fn custom_entry_observed(&mut self, entry: &str) {
        self.observe_entry(entry);
    }
}
